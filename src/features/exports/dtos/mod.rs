mod export_dto;

pub use export_dto::{
    ExportFilterQuery, ExportPreviewDto, ExportPreviewRowDto, ExportQuery, ExportRow,
};
