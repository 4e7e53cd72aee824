mod parser;
mod render;
mod sample;

pub use {
    parser::{decode_payload, parse_series},
    render::{PAYLOAD_HEADER, render_series},
    sample::{Sample, Series},
};
