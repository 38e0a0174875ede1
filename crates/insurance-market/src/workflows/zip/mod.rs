pub mod directory;
pub mod domain;
pub mod router;
pub mod service;


pub use directory::{HttpZipDirectory, ZipDirectory};
pub use domain::{
    ZipCode, ZipCodeInfo, ZipInputError, ZIP_NOT_FOUND_MESSAGE, ZIP_SERVICE_UNAVAILABLE_MESSAGE,
};
pub use router::zip_router;
pub use service::ZipLookupGateway;
