use common::form::Action;

pub enum Msg {
    /// A field edit or catalog outcome, handed straight to the form state.
    Form(Action),
    Submit,
    /// Outcome of the submission call; `Err` carries the transport error.
    SubmitSettled(Result<(), String>),
    Print,
    Close,
}
