use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetId(Uuid);

impl DatasetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DatasetId {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata for one uploaded dataset; lives for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub id: DatasetId,
    pub filename: String,
    pub size_bytes: u64,
}

impl Dataset {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        Self {
            id: DatasetId::new(),
            filename,
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Csv,
}

impl UploadKind {
    /// Classifies an upload from its declared MIME type, falling back to the
    /// filename extension (browsers often send CSV as octet-stream).
    pub fn from_upload(filename: &str, mime: Option<&str>) -> Option<Self> {
        match mime {
            Some("text/csv") | Some("application/csv") | Some("application/vnd.ms-excel") => {
                return Some(Self::Csv);
            }
            _ => {}
        }

        if filename.to_lowercase().ends_with(".csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}
