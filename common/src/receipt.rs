//! Frozen copy of a submitted request, as rendered on the printable receipt.

use crate::model::request::IssueRequest;
use crate::model::requester::Requester;
use crate::model::variant::FormVariant;

/// One signature line at the foot of the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureBlock {
    pub title: &'static str,
    /// Printed under the line; `None` leaves it blank for a handwritten name.
    pub name: Option<String>,
}

/// Snapshot taken when a submission goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub variant: FormVariant,
    pub request: IssueRequest,
}

impl Receipt {
    pub fn new(variant: FormVariant, request: IssueRequest) -> Self {
        Self { variant, request }
    }

    /// Department as it was submitted.
    pub fn department(&self) -> &str {
        self.request.department.resolved()
    }

    /// Students sign alongside their instructor and the HOD. Faculty and
    /// staff get the two-block layout.
    pub fn signature_blocks(&self) -> Vec<SignatureBlock> {
        let requester_name = non_blank(&self.request.name);
        let hod = SignatureBlock {
            title: "HOD's Signature",
            name: None,
        };

        match &self.request.requester {
            Requester::Student { instructor } => vec![
                SignatureBlock {
                    title: "Student's Signature",
                    name: requester_name,
                },
                SignatureBlock {
                    title: "Instructor's Signature",
                    name: non_blank(instructor),
                },
                hod,
            ],
            Requester::Faculty => vec![
                SignatureBlock {
                    title: "Faculty's Signature",
                    name: requester_name,
                },
                hod,
            ],
            Requester::Staff => vec![
                SignatureBlock {
                    title: "Staff's Signature",
                    name: requester_name,
                },
                hod,
            ],
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(requester: Requester) -> Receipt {
        let mut request = IssueRequest::empty(FormVariant::Lab);
        request.name = "Asha Rao".into();
        request.requester = requester;
        Receipt::new(FormVariant::Lab, request)
    }

    #[test]
    fn student_gets_three_blocks() {
        let blocks = receipt(Requester::Student {
            instructor: "Dr. Mehta".into(),
        })
        .signature_blocks();
        let titles: Vec<_> = blocks.iter().map(|b| b.title).collect();
        assert_eq!(
            titles,
            ["Student's Signature", "Instructor's Signature", "HOD's Signature"]
        );
        assert_eq!(blocks[0].name.as_deref(), Some("Asha Rao"));
        assert_eq!(blocks[1].name.as_deref(), Some("Dr. Mehta"));
        assert_eq!(blocks[2].name, None);
    }

    #[test]
    fn blank_instructor_leaves_line_empty() {
        let blocks = receipt(Requester::default()).signature_blocks();
        assert_eq!(blocks[1].name, None);
    }

    #[test]
    fn faculty_and_staff_collapse_to_two_blocks() {
        let faculty = receipt(Requester::Faculty).signature_blocks();
        assert_eq!(faculty.len(), 2);
        assert_eq!(faculty[0].title, "Faculty's Signature");

        let staff = receipt(Requester::Staff).signature_blocks();
        assert_eq!(staff.len(), 2);
        assert_eq!(staff[0].title, "Staff's Signature");
        assert_eq!(staff[1].title, "HOD's Signature");
    }
}
