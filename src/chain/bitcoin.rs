use crate::chain::{Chain, ChainConfig, ChainParams};

///
/// The reference network. Its defaults double as the base parameter
/// set other variants inherit from.
///
#[derive(Debug)]
pub struct Bitcoin {
    params: ChainParams,
}

impl Bitcoin {
    pub fn new(overrides: ChainConfig) -> Bitcoin {
        let defaults = ChainConfig {
            name: Some(String::from("Bitcoin")),
            code3: Some(String::from("BTC")),
            magic: Some([0xf9, 0xbe, 0xb4, 0xd9]),
            address_version: Some(0x00),
            script_addr_vers: Some(0x05),
            decimals: Some(8),
            ..Default::default()
        };
        Bitcoin {
            params: ChainParams::resolve(overrides, defaults, None),
        }
    }
}

impl Chain for Bitcoin {
    fn params(&self) -> &ChainParams {
        &self.params
    }
}
