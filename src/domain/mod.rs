mod answer;
mod context;
mod dataset;
mod summary;
mod table;

pub use answer::AnswerResult;
pub use context::Context;
pub use dataset::{Dataset, DatasetId, UploadKind};
pub use summary::{
    CategoricalColumnCounts, CategoricalSummary, NumericColumnStats, NumericSummary, ValueCount,
};
pub use table::{Column, ColumnType, Table, TableError, TablePreview};
