use fl_core::{Catalog, ErrorCatalog};

fl_core::message_error! {
    /// General purpose demo error
    pub TestError
}

fl_core::message_error! {
    /// Rejected request; mapped to 400 with a fixed message
    pub BadRequestError
}

fl_core::message_error! {
    /// Missing value; mapped to 404
    pub NullError
}

/// Catalog of the demo kinds, searchable by name
pub struct DemoCatalog;

impl ErrorCatalog for DemoCatalog {
    fn register(catalog: &mut Catalog) {
        catalog
            .add::<TestError>()
            .add::<BadRequestError>()
            .add::<NullError>();
    }
}
