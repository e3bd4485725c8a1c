//! Property tests for code validation and package document integrity

use bookscrape_core::code::{isbn10_to_13, validate};
use bookscrape_core::opf::{read_package, ContributorRole, MetaElement, TitleType};
use bookscrape_core::{
    assemble, BookCode, CodeError, LanguageTag, PackageDocument, PackageVersion,
    PartialBookMetadata,
};
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn checksum_ok(isbn13: &str) -> bool {
    let sum: u32 = isbn13
        .bytes()
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    sum % 10 == 0
}

#[derive(Debug, Clone)]
enum Op {
    Title(String),
    Contributor(String, ContributorRole),
    SortName(usize, String),
    Description(String),
}

fn role() -> impl Strategy<Value = ContributorRole> {
    prop_oneof![
        Just(ContributorRole::Author),
        Just(ContributorRole::Translator),
        Just(ContributorRole::Editor),
        Just(ContributorRole::Illustrator),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[A-Za-z ]{1,12}".prop_map(Op::Title),
        ("[A-Za-z ]{1,12}", role()).prop_map(|(name, role)| Op::Contributor(name, role)),
        (0usize..8, "[A-Za-z, ]{1,12}").prop_map(|(i, name)| Op::SortName(i, name)),
        "[A-Za-z .<>&]{0,20}".prop_map(Op::Description),
    ]
}

fn new_document() -> PackageDocument {
    PackageDocument::new(
        PackageVersion::V3,
        LanguageTag::PortugueseBrazil,
        "Main Title",
        "Main Author",
    )
}

fn meta_tuples(document: &PackageDocument) -> BTreeSet<(String, Option<String>, String)> {
    document
        .metadata()
        .metas
        .iter()
        .map(|m| (m.property.clone(), m.refines.clone(), m.value.clone()))
        .collect()
}

proptest! {
    #[test]
    fn isbn10_conversion_satisfies_checksum(digits in "[0-9]{9}", check in "[0-9Xx]") {
        let isbn13 = isbn10_to_13(&format!("{digits}{check}"));

        prop_assert_eq!(isbn13.len(), 13);
        prop_assert!(isbn13.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(&isbn13[..3], "978");
        prop_assert_eq!(&isbn13[3..12], digits.as_str());
        prop_assert!(checksum_ok(&isbn13));
    }

    #[test]
    fn validated_isbn10_matches_conversion(digits in "[0-9]{10}") {
        let code = validate("", &digits).unwrap();
        prop_assert_eq!(code.value, isbn10_to_13(&digits));
    }

    #[test]
    fn asin_without_b_is_rejected(asin in "[ac-zAC-Z0-9][A-Za-z0-9]{0,9}") {
        prop_assert_eq!(validate(&asin, ""), Err(CodeError::InvalidAsin(asin.clone())));
    }

    #[test]
    fn wrong_digit_counts_are_rejected(
        isbn in prop_oneof!["[0-9]{1,8}", "[0-9]{11,12}", "[0-9]{14,20}", "[a-z]{1,10}"]
    ) {
        prop_assert_eq!(validate("", &isbn), Err(CodeError::InvalidIsbn(isbn.clone())));
    }

    #[test]
    fn assembled_record_has_exactly_one_code(
        asin in "B[A-Z0-9]{9}",
        isbn in "[0-9]{10}",
        use_asin in any::<bool>(),
    ) {
        let code = if use_asin { validate(&asin, "") } else { validate("", &isbn) }.unwrap();
        let partial = PartialBookMetadata {
            title: "Title".to_string(),
            authors: vec!["Author".to_string()],
            cover_image_url: String::new(),
            language: LanguageTag::English,
            publisher: String::new(),
            published_at: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            description: String::new(),
        };

        let record = assemble(partial, code);
        prop_assert!(record.asin().is_empty() != record.isbn13().is_empty());
    }

    #[test]
    fn titles_get_sequential_ids(count in 1usize..30) {
        let mut document = new_document();
        for i in 1..count {
            document.add_title(&format!("Title {i}"), TitleType::Subtitle);
        }

        let titles = &document.metadata().titles;
        prop_assert_eq!(titles.len(), count);
        let title_types: Vec<_> = document.metadata().metas_with_property("title-type").collect();
        prop_assert_eq!(title_types.len(), count);

        for (i, (title, meta)) in titles.iter().zip(title_types).enumerate() {
            let expected = format!("title{:02}", i + 1);
            prop_assert_eq!(&title.id, &expected);
            prop_assert_eq!(meta.refines.clone(), Some(format!("#{expected}")));
        }
    }

    #[test]
    fn references_never_dangle(ops in prop::collection::vec(op(), 0..25)) {
        let mut document = new_document();
        let mut refs = Vec::new();

        for op in ops {
            match op {
                Op::Title(title) => document.add_title(&title, TitleType::Subtitle),
                Op::Contributor(name, role) => refs.push(document.add_contributor(&name, role)),
                Op::SortName(i, name) => {
                    if let Some(contributor) = refs.get(i) {
                        document.add_sort_name_to_contributor(contributor, &name).unwrap();
                    }
                }
                Op::Description(text) => document.set_description(&text),
            }
            prop_assert!(document.check_references().is_ok());
        }

        // A meta pointing past the last title is never accepted
        let next = format!("title{:02}", document.metadata().titles.len() + 1);
        prop_assert!(document.add_meta(MetaElement::new("display-seq", "1").refining(&next)).is_err());
    }

    #[test]
    fn serialization_round_trips_metas(ops in prop::collection::vec(op(), 0..15)) {
        let mut document = new_document();
        let mut refs = Vec::new();
        for op in ops {
            match op {
                Op::Title(title) => document.add_title(&title, TitleType::Short),
                Op::Contributor(name, role) => refs.push(document.add_contributor(&name, role)),
                Op::SortName(i, name) => {
                    if let Some(contributor) = refs.get(i) {
                        document.add_sort_name_to_contributor(contributor, &name).unwrap();
                    }
                }
                Op::Description(text) => document.set_description(&text),
            }
        }

        let parsed = read_package(&document.to_xml().unwrap()).unwrap();
        prop_assert_eq!(meta_tuples(&parsed), meta_tuples(&document));
        prop_assert_eq!(parsed.metadata(), document.metadata());
    }
}

#[test]
fn isbn10_scenario() {
    assert_eq!(validate("", "8535931004").unwrap(), BookCode::isbn13("9788535931006"));
}
