use crate::chain::{Chain, ChainConfig, ChainParams};
use crate::parser::opcodes::{OP_1, OP_16, OP_2DROP, OP_DROP, OP_NOP};
use crate::parser::script;
use crate::parser::script::{ScriptToken, ScriptType};

///
/// Merged-mined namespace coin. Its output scripts may carry a name
/// operation (a run of pushes and small integers balanced by drops)
/// in front of an otherwise standard script.
///
#[derive(Debug)]
pub struct Namecoin {
    params: ChainParams,
}

impl Namecoin {
    pub fn new(overrides: ChainConfig) -> Namecoin {
        let defaults = ChainConfig {
            name: Some(String::from("Namecoin")),
            code3: Some(String::from("NMC")),
            magic: Some([0xf9, 0xbe, 0xb4, 0xfe]),
            address_version: Some(0x34),
            script_addr_vers: Some(0x0d),
            decimals: Some(8),
            ..Default::default()
        };
        Namecoin {
            params: ChainParams::resolve(overrides, defaults, None),
        }
    }
}

impl Chain for Namecoin {
    fn params(&self) -> &ChainParams {
        &self.params
    }

    fn has_feature(&self, feature: &str) -> bool {
        feature == "block_version_bit8_merge_mine"
    }

    fn datadir_conf_file_name(&self) -> &'static str {
        "namecoin.conf"
    }

    fn datadir_rpcport(&self) -> u16 {
        8336
    }

    ///
    /// Tolerate (but ignore) a name operation in front of the script:
    /// skip an opening run of pushes and small integers once a
    /// matching run of drops has consumed them, then classify the
    /// remainder with the shared templates.
    ///
    fn classify_decoded_script(&self, decoded: Vec<ScriptToken>) -> ScriptType {
        let mut start = 0;
        let mut pushed: i32 = 0;
        for (i, token) in decoded.iter().enumerate() {
            let opcode = token.opcode;
            if token.data.is_some() || (OP_1..=OP_16).contains(&opcode) {
                pushed += 1;
            } else if opcode == OP_DROP {
                pushed -= 1;
            } else if opcode == OP_2DROP {
                pushed -= 2;
            } else if opcode == OP_NOP {
                continue;
            } else {
                break;
            }
            if pushed == 0 {
                start = i + 1;
            }
        }
        script::classify_decoded_script(decoded[start..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::bitcoin::Bitcoin;

    /// OP_1 push(20) OP_2DROP, then a standard p2pkh script
    fn name_new_script() -> Vec<u8> {
        let mut bytes = vec![0x51u8, 0x14];
        bytes.extend_from_slice(&[0xccu8; 20]);
        bytes.push(0x6d);
        bytes.extend_from_slice(&[0x76, 0xa9, 0x14]);
        bytes.extend_from_slice(&[0xddu8; 20]);
        bytes.extend_from_slice(&[0x88, 0xac]);
        bytes
    }

    #[test]
    fn test_name_operation_is_stripped() {
        let chain = Namecoin::new(ChainConfig::default());
        assert_eq!(
            chain.parse_txout_script(&name_new_script()),
            ScriptType::Pay2PublicKeyHash {
                pubkey_hash: [0xddu8; 20]
            }
        );
    }

    #[test]
    fn test_base_chain_does_not_strip() {
        let chain = Bitcoin::new(ChainConfig::default());
        match chain.parse_txout_script(&name_new_script()) {
            ScriptType::NotRecognised { .. } => {}
            other => panic!("expected NotRecognised, got {}", other),
        }
    }

    #[test]
    fn test_feature_flag() {
        let chain = Namecoin::new(ChainConfig::default());
        assert!(chain.has_feature("block_version_bit8_merge_mine"));
        assert!(!chain.has_feature("p2sh"));
    }
}
