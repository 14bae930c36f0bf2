pub mod shake_params;
pub mod error;
pub mod lane_codec;
pub mod keccak;
pub mod sponge;
pub mod shake;
pub mod xof_stream;


pub use error::{XofError, XofResult};
pub use shake::{shake128, shake128_vec, Shake128};
pub use sponge::Phase;
pub use xof_stream::ShakeStream;
