//! Builder operations on [`PackageDocument`]

use super::{
    ContributorCategory, ContributorElement, ContributorRef, ContributorRole, IdentifierElement,
    IdentifierType, MetaElement, PackageDocument, PackageMetadata, PackageVersion, TitleElement,
    TitleType, UNIQUE_IDENTIFIER_ID,
};
use crate::error::OpfError;
use crate::types::{BookMetadataRecord, CodeKind, LanguageTag};
use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};
use uuid::Uuid;

const MODIFIED_PROPERTY: &str = "dcterms:modified";

impl PackageDocument {
    /// Create a document seeded with a random unique identifier, the
    /// language, the main title and the main author.
    ///
    /// 3.0 documents also get a `dcterms:modified` stamp for the current time.
    pub fn new(
        version: PackageVersion,
        language: LanguageTag,
        main_title: &str,
        main_author: &str,
    ) -> Self {
        Self::new_with_identifier(
            version,
            language,
            main_title,
            main_author,
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    /// Like [`PackageDocument::new`] with a fixed identifier and clock
    pub fn new_with_identifier(
        version: PackageVersion,
        language: LanguageTag,
        main_title: &str,
        main_author: &str,
        identifier: Uuid,
        now: DateTime<Utc>,
    ) -> Self {
        let mut document = Self {
            instance: Uuid::new_v4(),
            version,
            unique_identifier_id: UNIQUE_IDENTIFIER_ID.to_string(),
            language: language.as_str().to_string(),
            text_direction: Some("ltr".to_string()),
            metadata: PackageMetadata {
                identifiers: vec![IdentifierElement {
                    value: format!("urn:uuid:{identifier}"),
                    id: UNIQUE_IDENTIFIER_ID.to_string(),
                }],
                language: language.as_str().to_string(),
                metas: vec![MetaElement::new("identifier-type", IdentifierType::Uuid.as_str())
                    .refining(UNIQUE_IDENTIFIER_ID)],
                ..PackageMetadata::default()
            },
        };

        document.add_title(main_title, TitleType::Main);
        document.add_contributor(main_author, ContributorRole::Author);

        if version.supports_modified() {
            document.set_modification_date(now);
        }

        document
    }

    /// Build a complete document from an extracted record: every author,
    /// description, publisher, publication date and the book's own code.
    pub fn from_record(version: PackageVersion, record: &BookMetadataRecord) -> Self {
        let mut authors = record.authors().iter();
        let main_author = authors.next().map(String::as_str).unwrap_or_default();

        let mut document = Self::new(version, record.language(), record.title(), main_author);
        for author in authors {
            document.add_contributor(author, ContributorRole::Author);
        }

        document.set_description(record.description());
        document.set_publisher(record.publisher());
        document.set_publication_date(record.published_at().and_time(NaiveTime::MIN).and_utc());

        let code = record.primary_identifier();
        match code.kind {
            CodeKind::Isbn13 => {
                document.add_identifier(&format!("urn:isbn:{}", code.value), IdentifierType::Isbn)
            }
            CodeKind::Asin => document.add_identifier(&code.value, IdentifierType::Asin),
        };

        document
    }

    pub fn version(&self) -> PackageVersion {
        self.version
    }

    pub fn unique_identifier_id(&self) -> &str {
        &self.unique_identifier_id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn text_direction(&self) -> Option<&str> {
        self.text_direction.as_deref()
    }

    pub fn metadata(&self) -> &PackageMetadata {
        &self.metadata
    }

    /// Append a title and its `title-type` meta
    pub fn add_title(&mut self, title: &str, title_type: TitleType) {
        let id = next_id("title", self.metadata.titles.iter().map(|t| t.id.as_str()));

        self.metadata.titles.push(TitleElement {
            value: title.to_string(),
            id: id.clone(),
        });
        self.metadata
            .metas
            .push(MetaElement::new("title-type", title_type.as_str()).refining(&id));
    }

    /// Append an author (as `dc:creator`) or another contributor (as
    /// `dc:contributor`) with its `role` meta.
    ///
    /// The returned reference is only valid for this document.
    pub fn add_contributor(&mut self, name: &str, role: ContributorRole) -> ContributorRef {
        let category = role.category();
        let (prefix, list) = match category {
            ContributorCategory::Creator => ("creator", &mut self.metadata.creators),
            ContributorCategory::Contributor => ("contributor", &mut self.metadata.contributors),
        };

        let id = next_id(prefix, list.iter().map(|c| c.id.as_str()));
        list.push(ContributorElement {
            value: name.to_string(),
            id: id.clone(),
        });

        self.metadata.metas.push(
            MetaElement::new("role", role.code())
                .refining(&id)
                .with_scheme("marc:relators"),
        );

        ContributorRef {
            document: self.instance,
            category,
            id,
        }
    }

    /// Record the contributor's name in another script
    pub fn add_alternate_script_to_contributor(
        &mut self,
        contributor: &ContributorRef,
        script: &str,
        lang: LanguageTag,
    ) -> Result<(), OpfError> {
        self.resolve(contributor)?;
        self.metadata.metas.push(
            MetaElement::new("alternate-script", script)
                .refining(&contributor.id)
                .with_lang(lang.as_str()),
        );
        Ok(())
    }

    /// Record the contributor's sort name (`file-as`)
    pub fn add_sort_name_to_contributor(
        &mut self,
        contributor: &ContributorRef,
        sort_name: &str,
    ) -> Result<(), OpfError> {
        self.resolve(contributor)?;
        self.metadata
            .metas
            .push(MetaElement::new("file-as", sort_name).refining(&contributor.id));
        Ok(())
    }

    /// Append a secondary identifier with its `identifier-type` meta,
    /// returning its id
    pub fn add_identifier(&mut self, value: &str, identifier_type: IdentifierType) -> String {
        // The unique identifier is not part of the numbered sequence
        let id = next_id(
            "identifier",
            self.metadata.identifiers.iter().map(|i| i.id.as_str()),
        );

        self.metadata.identifiers.push(IdentifierElement {
            value: value.to_string(),
            id: id.clone(),
        });
        self.metadata
            .metas
            .push(MetaElement::new("identifier-type", identifier_type.as_str()).refining(&id));
        id
    }

    /// Append a free-form meta, rejecting a `refines` that points nowhere
    pub fn add_meta(&mut self, meta: MetaElement) -> Result<(), OpfError> {
        if let Some(target) = &meta.refines {
            if !self.refines_target_exists(target) {
                return Err(OpfError::DanglingReference(target.clone()));
            }
        }
        self.metadata.metas.push(meta);
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) {
        self.metadata.description = Some(description.to_string());
    }

    pub fn set_publisher(&mut self, publisher: &str) {
        self.metadata.publisher = Some(publisher.to_string());
    }

    pub fn set_publication_date(&mut self, date: DateTime<Utc>) {
        self.metadata.date = Some(format_timestamp(date));
    }

    /// Set the `dcterms:modified` stamp, replacing an earlier one
    pub fn set_modification_date(&mut self, date: DateTime<Utc>) {
        let value = format_timestamp(date);
        match self
            .metadata
            .metas
            .iter_mut()
            .find(|m| m.property == MODIFIED_PROPERTY && m.refines.is_none())
        {
            Some(meta) => meta.value = value,
            None => self
                .metadata
                .metas
                .push(MetaElement::new(MODIFIED_PROPERTY, value)),
        }
    }

    /// Verify every `refines` points at an existing element
    pub fn check_references(&self) -> Result<(), OpfError> {
        match self
            .metadata
            .metas
            .iter()
            .filter_map(|m| m.refines.as_deref())
            .find(|target| !self.refines_target_exists(target))
        {
            Some(target) => Err(OpfError::DanglingReference(target.to_string())),
            None => Ok(()),
        }
    }

    /// Serialize to OPF XML
    pub fn to_xml(&self) -> Result<String, OpfError> {
        super::xml::render_package(self)
    }

    fn refines_target_exists(&self, target: &str) -> bool {
        target
            .strip_prefix('#')
            .is_some_and(|id| self.metadata.contains_id(id))
    }

    fn resolve(&self, contributor: &ContributorRef) -> Result<(), OpfError> {
        let list = match contributor.category {
            ContributorCategory::Creator => &self.metadata.creators,
            ContributorCategory::Contributor => &self.metadata.contributors,
        };

        if contributor.document == self.instance && list.iter().any(|c| c.id == contributor.id) {
            Ok(())
        } else {
            Err(OpfError::UnknownReference(contributor.id.clone()))
        }
    }
}

/// One past the highest numbered id with this prefix; other ids are ignored
fn next_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let highest = existing
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<usize>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:02}", highest + 1)
}

fn format_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
