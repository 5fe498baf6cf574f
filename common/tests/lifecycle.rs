use common::catalog::parse_catalog;
use common::form::{Action, FormState, Phase};
use common::model::variant::FormVariant;

fn asha() -> Vec<Action> {
    vec![
        Action::SetName("Asha Rao".into()),
        Action::SetIdentifier("2021UCS001".into()),
        Action::SetDepartment("Computer Science and Engineering".into()),
        Action::SetEmail("asha@lnmiit.ac.in".into()),
        Action::SetMobile("9876543210".into()),
        Action::ChooseItem {
            index: 0,
            value: "Soldering Iron".into(),
        },
        Action::SetItemQuantity {
            index: 0,
            value: "1".into(),
        },
    ]
}

#[test]
fn student_request_ends_in_a_receipt() {
    let catalog = parse_catalog("Item,Location\nSoldering Iron,Rack 2\nMultimeter,Rack 1\n").unwrap();
    let state = FormState::new(FormVariant::Store).apply(Action::CatalogLoaded(catalog));
    let state = asha().into_iter().fold(state, FormState::apply);

    let state = state.apply(Action::Submit);
    let payload = state.payload().expect("valid request is submitted");
    assert_eq!(payload.name, "Asha Rao");
    assert_eq!(payload.items[0].item_name, "Soldering Iron");

    let state = state.apply(Action::SubmitSucceeded);
    let receipt = state.phase.receipt().expect("receipt after success");
    assert_eq!(receipt.request.name, "Asha Rao");
    assert_eq!(receipt.request.identifier, "2021UCS001");
    assert_eq!(receipt.department(), "Computer Science and Engineering");
    assert_eq!(receipt.request.email, "asha@lnmiit.ac.in");
    assert_eq!(receipt.request.mobile, "9876543210");
    assert_eq!(receipt.request.items.get(0).unwrap().quantity, "1");

    let student = &receipt.signature_blocks()[0];
    assert_eq!(student.title, "Student's Signature");
    assert_eq!(student.name.as_deref(), Some("Asha Rao"));

    let after_edit = state.clone().apply(Action::SetName("Changed".into()));
    assert_eq!(after_edit, state);

    let fresh = state.apply(Action::Close);
    assert!(matches!(fresh.phase, Phase::Editing { error: None }));
    assert_eq!(fresh.request.name, "");
    assert_eq!(fresh.request.items.len(), 1);
}

#[test]
fn gmail_address_is_rejected_and_form_stays_editable() {
    let state = asha()
        .into_iter()
        .fold(FormState::new(FormVariant::Store), FormState::apply)
        .apply(Action::SetEmail("asha@gmail.com".into()))
        .apply(Action::Submit);

    assert!(state.phase.is_editing());
    assert_eq!(
        state.phase.error().map(ToString::to_string).as_deref(),
        Some("Email must be a valid LNMIIT email address (@lnmiit.ac.in)")
    );

    let state = state
        .apply(Action::SetEmail("asha@lnmiit.ac.in".into()))
        .apply(Action::Submit);
    assert_eq!(state.phase, Phase::Submitting);
}

#[test]
fn network_failure_leaves_request_retriable() {
    let state = asha()
        .into_iter()
        .fold(FormState::new(FormVariant::Lab), FormState::apply)
        .apply(Action::Submit)
        .apply(Action::SubmitFailed("NetworkError".into()));

    assert_eq!(
        state.phase.error().map(ToString::to_string).as_deref(),
        Some("Failed to submit the form. Please check your connection and try again.")
    );
    assert_eq!(state.request.name, "Asha Rao");
    assert_eq!(state.apply(Action::Submit).phase, Phase::Submitting);
}
