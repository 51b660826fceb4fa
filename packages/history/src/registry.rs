use crate::HistoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub table: &'static str,
    pub query: &'static str,
}

// Joined entries are LEFT JOINs so rows with an unresolved reference are
// still exported with null enrichment columns.
const DESCRIPTORS: &[QueryDescriptor] = &[
    QueryDescriptor {
        table: "downloads",
        query: "SELECT * FROM downloads",
    },
    QueryDescriptor {
        table: "downloads_slices",
        query: "SELECT * FROM downloads_slices",
    },
    QueryDescriptor {
        table: "downloads_url_chains",
        query: "SELECT * FROM downloads_url_chains",
    },
    QueryDescriptor {
        table: "keyword_search_terms",
        query: "SELECT hidden,last_visit_time,normalized_term,term,title,typed_count,url,visit_count FROM keyword_search_terms LEFT JOIN urls ON keyword_search_terms.url_id = urls.id",
    },
    QueryDescriptor {
        table: "meta",
        query: "SELECT * FROM meta",
    },
    QueryDescriptor {
        table: "segment_usage",
        query: "SELECT * FROM segment_usage LEFT JOIN segments ON segment_usage.segment_id = segments.id",
    },
    QueryDescriptor {
        table: "segments",
        query: "SELECT name,url,title,visit_count,typed_count,last_visit_time FROM segments LEFT JOIN urls ON segments.url_id = urls.id",
    },
    QueryDescriptor {
        table: "sqlite_sequence",
        query: "SELECT * FROM sqlite_sequence",
    },
    QueryDescriptor {
        table: "typed_url_sync_metadata",
        query: "SELECT * FROM typed_url_sync_metadata",
    },
    QueryDescriptor {
        table: "urls",
        query: "SELECT * FROM urls",
    },
    QueryDescriptor {
        table: "visit_source",
        query: "SELECT * FROM visit_source",
    },
    QueryDescriptor {
        table: "visits",
        query: "SELECT * FROM visits",
    },
];

/// Table exported when no table is named on the command line.
pub const DEFAULT_TABLE: &str = "urls";

pub fn descriptors() -> &'static [QueryDescriptor] {
    DESCRIPTORS
}

pub fn lookup(table: &str) -> Result<&'static QueryDescriptor, HistoryError> {
    DESCRIPTORS
        .iter()
        .find(|descriptor| descriptor.table == table)
        .ok_or_else(|| HistoryError::UnknownTable(table.to_string()))
}

pub fn is_known(table: &str) -> bool {
    lookup(table).is_ok()
}

pub fn known_tables() -> impl Iterator<Item = &'static str> {
    DESCRIPTORS.iter().map(|descriptor| descriptor.table)
}
