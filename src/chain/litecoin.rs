use crate::chain::{Chain, ChainConfig, ChainParams};

#[derive(Debug)]
pub struct Litecoin {
    params: ChainParams,
}

impl Litecoin {
    pub fn new(overrides: ChainConfig) -> Litecoin {
        let defaults = ChainConfig {
            name: Some(String::from("Litecoin")),
            code3: Some(String::from("LTC")),
            magic: Some([0xfb, 0xc0, 0xb6, 0xdb]),
            address_version: Some(0x30),
            script_addr_vers: Some(0x05),
            decimals: Some(8),
            ..Default::default()
        };
        Litecoin {
            params: ChainParams::resolve(overrides, defaults, None),
        }
    }
}

impl Chain for Litecoin {
    fn params(&self) -> &ChainParams {
        &self.params
    }

    fn datadir_conf_file_name(&self) -> &'static str {
        "litecoin.conf"
    }

    fn datadir_rpcport(&self) -> u16 {
        9332
    }
}
