//! Property tests for `oai_kdk` output invariants.

mod common;

use common::{leaves, test_config};
use oaifmt::config::ClassificationScheme;
use oaifmt::vocabulary::{DC_TERMS, LANGUAGE_NAMES, PLAIN_ELEMENTS};
use oaifmt::{Item, OaiKdk};
use proptest::prelude::*;

fn format() -> OaiKdk {
    OaiKdk::new(test_config())
}

proptest! {
    #[test]
    fn prop_blank_values_emit_nothing(blank in "[ \t]{0,3}", field in 0usize..51) {
        let label = if field < PLAIN_ELEMENTS.len() {
            PLAIN_ELEMENTS[field].element
        } else {
            DC_TERMS[field - PLAIN_ELEMENTS.len()].element
        };
        let item = Item::builder(1).dc(label, &blank).build();
        let root = format().item_to_element(&item);

        // Only the landing-page identifier survives.
        let names: Vec<&str> = root.children().map(|e| e.name()).collect();
        prop_assert_eq!(names, vec!["dc:identifier"]);
    }

    #[test]
    fn prop_numeric_subjects_are_classified(code in "[0-9][0-9. -]{0,8}", udc in any::<bool>()) {
        let scheme = if udc { ClassificationScheme::Udc } else { ClassificationScheme::Ykl };
        let format = OaiKdk::new(test_config().with_classification_scheme(scheme));
        let item = Item::builder(1).dc("Subject", &code).build();
        let root = format.item_to_element(&item);

        let subjects = leaves(&root, "dc:subject");
        prop_assert_eq!(subjects.len(), 1);
        prop_assert_eq!(subjects[0].0, Some(scheme.xsi_type()));
        prop_assert_eq!(&subjects[0].1, code.trim());
    }

    #[test]
    fn prop_lettered_subjects_are_free_text(subject in "[0-9]{0,3}[ .]?[a-zA-ZäöÅ][a-z0-9 .-]{0,10}") {
        let item = Item::builder(1).dc("Subject", &subject).build();
        let root = format().item_to_element(&item);

        let subjects = leaves(&root, "dc:subject");
        prop_assert_eq!(subjects.len(), 1);
        prop_assert_eq!(subjects[0].0, None);
    }

    #[test]
    fn prop_two_letter_languages_pass_through(code in "[a-zA-Z]{2}") {
        let item = Item::builder(1).dc("Language", &code).build();
        let root = format().item_to_element(&item);

        prop_assert_eq!(leaves(&root, "dc:language"), vec![(None, code.clone())]);
    }

    #[test]
    fn prop_unknown_languages_fall_back(name in "[a-z]{3,12}") {
        prop_assume!(LANGUAGE_NAMES.iter().all(|(known, _)| *known != name));
        let format = OaiKdk::new(test_config().with_fallback_language("sv"));
        let item = Item::builder(1).dc("Language", &name).build();
        let root = format.item_to_element(&item);

        prop_assert_eq!(leaves(&root, "dc:language"), vec![(None, "sv".to_string())]);
    }

    #[test]
    fn prop_exactly_one_canonical_identifier(
        id in 1u64..1_000_000,
        identifiers in prop::collection::vec("(URN:NBN:fi-)?[a-z0-9:/. -]{0,16}", 0..6),
    ) {
        let mut builder = Item::builder(id);
        for identifier in &identifiers {
            builder = builder.dc("Identifier", identifier);
        }
        let root = format().item_to_element(&builder.build());

        let canonical: Vec<String> = leaves(&root, "dc:identifier")
            .into_iter()
            .filter(|(kind, _)| *kind == Some("coolUri"))
            .map(|(_, url)| url)
            .collect();
        prop_assert_eq!(canonical, vec![format!("{}/items/show/{id}", common::BASE_URL)]);
    }
}

#[test]
fn test_known_language_names() {
    for (name, code) in LANGUAGE_NAMES {
        let item = Item::builder(1).dc("Language", &name.to_uppercase()).build();
        let root = format().item_to_element(&item);
        assert_eq!(leaves(&root, "dc:language"), vec![(None, code.to_string())]);
    }
}
