use shared::{CampgroundDraft, CampgroundFields};

/// Declarative payload rules for a campground submission. Each rule failure
/// becomes one human-readable message; the caller joins them into a single
/// 400 response so the client sees every violation at once.
///
/// Review payloads carry no rules here: the 1-5 rating range is intended
/// but deliberately left unenforced.
pub fn validate_campground(draft: &CampgroundDraft) -> Result<CampgroundFields, Vec<String>> {
    let mut violations = Vec::new();

    let title = require_text("title", &draft.title, &mut violations);
    let description = require_text("description", &draft.description, &mut violations);
    let location = require_text("location", &draft.location, &mut violations);
    let image = require_text("image", &draft.image, &mut violations);

    let price = match draft.price {
        None => {
            violations.push("\"price\" is required".to_string());
            None
        }
        Some(p) if p < 0.0 => {
            violations.push("\"price\" must be greater than or equal to 0".to_string());
            None
        }
        Some(p) => Some(p),
    };

    // Each rule yields the field on success or records a violation, so a
    // fully-populated tuple means a clean payload and anything else means
    // `violations` is non-empty.
    match (title, price, description, location, image) {
        (Some(title), Some(price), Some(description), Some(location), Some(image)) => {
            Ok(CampgroundFields {
                title,
                price,
                description,
                location,
                image,
            })
        }
        _ => Err(violations),
    }
}

fn require_text(
    field: &str,
    value: &Option<String>,
    violations: &mut Vec<String>,
) -> Option<String> {
    match value {
        None => {
            violations.push(format!("\"{field}\" is required"));
            None
        }
        Some(s) if s.trim().is_empty() => {
            violations.push(format!("\"{field}\" is not allowed to be empty"));
            None
        }
        Some(s) => Some(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> CampgroundDraft {
        CampgroundDraft {
            title: Some("Pine Ridge".to_string()),
            price: Some(25.0),
            description: Some("nice".to_string()),
            location: Some("CO".to_string()),
            image: Some("http://x/y.jpg".to_string()),
        }
    }

    #[test]
    fn complete_draft_passes() {
        let fields = validate_campground(&full_draft()).expect("valid draft");
        assert_eq!(fields.title, "Pine Ridge");
        assert_eq!(fields.price, 25.0);
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let violations = validate_campground(&CampgroundDraft::default()).unwrap_err();
        assert_eq!(violations.len(), 5);
        assert!(
            violations.iter().all(|v| v.starts_with('"')),
            "every violation names its field: {violations:?}"
        );
        for field in ["title", "price", "description", "location", "image"] {
            assert!(
                violations.iter().any(|v| v.contains(&format!("\"{field}\""))),
                "missing violation for {field}: {violations:?}"
            );
        }
    }

    #[test]
    fn empty_title_and_negative_price_both_reported() {
        let draft = CampgroundDraft {
            title: Some("".to_string()),
            price: Some(-5.0),
            ..full_draft()
        };
        let violations = validate_campground(&draft).unwrap_err();
        assert!(violations.iter().any(|v| v.contains("\"title\"")));
        assert!(violations
            .iter()
            .any(|v| v.contains("\"price\" must be greater than or equal to 0")));
    }

    #[test]
    fn whitespace_only_text_is_empty() {
        let draft = CampgroundDraft {
            location: Some("   ".to_string()),
            ..full_draft()
        };
        let violations = validate_campground(&draft).unwrap_err();
        assert_eq!(violations, vec!["\"location\" is not allowed to be empty"]);
    }

    #[test]
    fn zero_price_is_allowed() {
        let draft = CampgroundDraft {
            price: Some(0.0),
            ..full_draft()
        };
        assert!(validate_campground(&draft).is_ok());
    }
}
