pub mod adata;
pub mod attachment;
pub mod codec;
pub mod crypto;
pub mod encode;
pub mod options;
pub mod paste;
pub mod secret;
#[cfg(feature = "http")]
pub mod api;

pub use adata::AssociatedData;
pub use attachment::Attachment;
pub use codec::Compression;
pub use encode::{encode, encode_with_source, EncodeError};
pub use options::{Expire, Formatter, PasteOptions};
pub use paste::{EncodedPaste, PasteBody, PasteRecord};
#[cfg(feature = "http")]
pub use api::{ApiClient, PostResponse};
