//! Wire types exchanged with the submission endpoint.

use serde::{Deserialize, Serialize};

use crate::model::request::IssueRequest;
use crate::model::requester::RequesterCategory;
use crate::model::variant::FormVariant;

/// JSON body posted to the submission endpoint.
///
/// The department is already resolved: the "Others" escape never appears,
/// the typed override does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub form: FormVariant,
    pub requester_type: RequesterCategory,
    pub name: String,
    pub roll_no: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    pub email: String,
    pub mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub items: Vec<ItemPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub item_name: String,
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl SubmissionPayload {
    pub fn from_request(variant: FormVariant, request: &IssueRequest) -> Self {
        let items = request
            .items
            .iter()
            .map(|row| ItemPayload {
                item_name: row.name.clone(),
                quantity: row.quantity.clone(),
                issue_date: row.details.as_ref().map(|d| d.issue_date.clone()),
                return_date: row.details.as_ref().map(|d| d.return_date.clone()),
                remark: row.details.as_ref().map(|d| d.remark.clone()),
            })
            .collect();

        Self {
            form: variant,
            requester_type: request.requester.category(),
            name: request.name.clone(),
            roll_no: request.identifier.clone(),
            department: request.department.resolved().to_string(),
            instructor_name: request.requester.instructor().map(str::to_string),
            email: request.email.trim().to_string(),
            mobile: request.mobile.clone(),
            issue_date: request.period.as_ref().map(|p| p.issue_date.clone()),
            return_date: request.period.as_ref().map(|p| p.return_date.clone()),
            items,
        }
    }
}

/// Acknowledgment returned by the companion server. The browser cannot read
/// it through a `no-cors` call; it exists for other clients and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub id: String,
    pub rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::department::OTHERS;
    use crate::model::item::{ItemDetails, ItemRow};
    use serde_json::json;

    #[test]
    fn store_payload_substitutes_other_department() {
        let mut request = IssueRequest::empty(FormVariant::Store);
        request.name = "Asha Rao".into();
        request.identifier = "2021UCS001".into();
        request.department = request
            .department
            .choose(OTHERS.into())
            .set_override("Centre for Robotics".into());
        request.email = "asha@lnmiit.ac.in".into();
        request.mobile = "9876543210".into();
        request.items.replace(vec![ItemRow {
            name: "Soldering Iron".into(),
            quantity: "1".into(),
            details: None,
        }]);

        let value = serde_json::to_value(SubmissionPayload::from_request(
            FormVariant::Store,
            &request,
        ))
        .unwrap();

        assert_eq!(
            value,
            json!({
                "form": "store",
                "requesterType": "student",
                "name": "Asha Rao",
                "rollNo": "2021UCS001",
                "department": "Centre for Robotics",
                "instructorName": "",
                "email": "asha@lnmiit.ac.in",
                "mobile": "9876543210",
                "issueDate": "",
                "returnDate": "",
                "items": [{ "itemName": "Soldering Iron", "quantity": "1" }]
            })
        );
    }

    #[test]
    fn lab_payload_carries_item_dates() {
        let mut request = IssueRequest::empty(FormVariant::Lab);
        request.requester = crate::model::requester::Requester::Staff;
        request.items.replace(vec![ItemRow {
            name: "Arduino Uno".into(),
            quantity: "2".into(),
            details: Some(ItemDetails {
                issue_date: "2026-10-19".into(),
                return_date: "2026-10-26".into(),
                remark: "project".into(),
            }),
        }]);

        let payload = SubmissionPayload::from_request(FormVariant::Lab, &request);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["requesterType"], "staff");
        assert!(value.get("instructorName").is_none());
        assert!(value.get("issueDate").is_none());
        assert_eq!(value["items"][0]["returnDate"], "2026-10-26");
        assert_eq!(value["items"][0]["remark"], "project");

        let back: SubmissionPayload = serde_json::from_value(value).unwrap();
        assert_eq!(back, payload);
    }
}
