use crate::chain::{Chain, ChainConfig, ChainParams};

#[derive(Debug)]
pub struct Dogecoin {
    params: ChainParams,
}

impl Dogecoin {
    pub fn new(overrides: ChainConfig) -> Dogecoin {
        let defaults = ChainConfig {
            name: Some(String::from("Dogecoin")),
            code3: Some(String::from("DOGE")),
            magic: Some([0xc0, 0xc0, 0xc0, 0xc0]),
            address_version: Some(0x1e),
            script_addr_vers: Some(0x16),
            decimals: Some(8),
            ..Default::default()
        };
        Dogecoin {
            params: ChainParams::resolve(overrides, defaults, None),
        }
    }
}

impl Chain for Dogecoin {
    fn params(&self) -> &ChainParams {
        &self.params
    }

    fn datadir_conf_file_name(&self) -> &'static str {
        "dogecoin.conf"
    }

    fn datadir_rpcport(&self) -> u16 {
        22555
    }
}
