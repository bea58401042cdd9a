use super::settings::RequiredDocuments;
use crate::types::application::Documents;
use crate::types::scoring::CategoryGap;

/// Returns `(all_present, missing)` for the submitted documents.
///
/// A category missing outright contributes its whole required list; a
/// category that is present contributes each absent field individually.
pub fn validate_documents(
    required: &RequiredDocuments,
    documents: &Documents,
) -> (bool, Vec<String>) {
    let missing = document_gaps(required, documents)
        .into_iter()
        .flat_map(|gap| gap.missing_fields)
        .collect::<Vec<_>>();
    (missing.is_empty(), missing)
}

/// Per-category view of the same check, in table order. Categories with
/// nothing missing are omitted.
pub fn document_gaps(required: &RequiredDocuments, documents: &Documents) -> Vec<CategoryGap> {
    let mut gaps = Vec::new();
    for category in required.categories() {
        let gap = match documents.get(&category.category) {
            None => CategoryGap {
                category: category.category.clone(),
                category_present: false,
                missing_fields: category.fields.clone(),
            },
            Some(submitted) => CategoryGap {
                category: category.category.clone(),
                category_present: true,
                missing_fields: category
                    .fields
                    .iter()
                    .filter(|field| !submitted.contains_key(field.as_str()))
                    .cloned()
                    .collect(),
            },
        };
        if !gap.missing_fields.is_empty() {
            gaps.push(gap);
        }
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::settings::DocumentCategory;
    use crate::fixtures::{fields, full_documents};
    use serde_json::Value;

    #[test]
    fn complete_documents_pass() {
        let (valid, missing) = validate_documents(&RequiredDocuments::default(), &full_documents());
        assert!(valid);
        assert!(missing.is_empty());
    }

    #[test]
    fn absent_category_reports_every_field() {
        let mut documents = full_documents();
        documents.remove("financial");

        let (valid, missing) = validate_documents(&RequiredDocuments::default(), &documents);
        assert!(!valid);
        assert_eq!(missing, vec!["bank_statements", "income_proof"]);
    }

    #[test]
    fn partial_category_reports_only_absent_fields() {
        let mut documents = full_documents();
        documents.insert("passport".to_string(), fields(&["issue_date"]));

        let (valid, missing) = validate_documents(&RequiredDocuments::default(), &documents);
        assert!(!valid);
        assert_eq!(missing, vec!["expiry_date", "nationality"]);
    }

    #[test]
    fn missing_fields_follow_table_order() {
        let (valid, missing) = validate_documents(&RequiredDocuments::default(), &Documents::new());
        assert!(!valid);
        assert_eq!(
            missing,
            vec![
                "expiry_date",
                "issue_date",
                "nationality",
                "bank_statements",
                "income_proof",
                "invitation_letter",
                "travel_itinerary",
                "employment_status",
                "travel_history",
            ]
        );
    }

    #[test]
    fn null_values_count_as_present() {
        let mut documents = full_documents();
        documents
            .get_mut("purpose")
            .expect("purpose category should exist")
            .insert("invitation_letter".to_string(), Value::Null);

        let (valid, _) = validate_documents(&RequiredDocuments::default(), &documents);
        assert!(valid);
    }

    #[test]
    fn shared_field_names_are_reported_per_category() {
        let required = RequiredDocuments::new(vec![
            DocumentCategory::new("passport", &["issue_date"]),
            DocumentCategory::new("residence_permit", &["issue_date"]),
        ]);

        let (_, missing) = validate_documents(&required, &Documents::new());
        assert_eq!(missing, vec!["issue_date", "issue_date"]);
    }

    #[test]
    fn gaps_record_category_presence() {
        let mut documents = full_documents();
        documents.remove("purpose");
        documents.insert("personal".to_string(), fields(&["employment_status"]));

        let gaps = document_gaps(&RequiredDocuments::default(), &documents);
        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].category, "purpose");
        assert!(!gaps[0].category_present);
        assert_eq!(gaps[1].category, "personal");
        assert!(gaps[1].category_present);
        assert_eq!(gaps[1].missing_fields, vec!["travel_history"]);
    }
}
