#[allow(clippy::module_inception)]
mod config;
mod link_config;
mod storage_config;

pub(crate) use {config::Config, link_config::LinkConfig, storage_config::StorageConfig};

pub(crate) const DEFAULT_SAMPLE_RATE_HZ: u32 = 50;

pub(crate) fn default_sample_rate_hz() -> u32 {
    DEFAULT_SAMPLE_RATE_HZ
}
