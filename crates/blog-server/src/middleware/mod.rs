//! HTTP middleware.

pub mod request_id;

pub use request_id::{
    REQUEST_ID_HEADER, make_request_span, propagate_request_id, request_id_layer,
};
