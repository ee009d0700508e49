use crate::chain::bitcoin::Bitcoin;
use crate::chain::{Chain, ChainConfig, ChainParams};

///
/// The Bitcoin test network. Parameters not overridden here
/// (notably `decimals`) are inherited from the `Bitcoin` policy.
///
#[derive(Debug)]
pub struct Testnet {
    params: ChainParams,
}

impl Testnet {
    pub fn new(overrides: ChainConfig) -> Testnet {
        let src = Bitcoin::new(ChainConfig::default());
        let defaults = ChainConfig {
            name: Some(String::from("Testnet")),
            code3: Some(String::from("BC0")),
            magic: Some([0xfa, 0xbf, 0xb5, 0xda]),
            address_version: Some(0x6f),
            script_addr_vers: Some(0xc4),
            ..Default::default()
        };
        Testnet {
            params: ChainParams::resolve(overrides, defaults, Some(src.params())),
        }
    }
}

impl Chain for Testnet {
    fn params(&self) -> &ChainParams {
        &self.params
    }

    fn datadir_rpcport(&self) -> u16 {
        18332
    }
}
