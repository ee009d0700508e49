//!
//! Integration Test
//!
//! Parse, hash and classify real wire data, cross checking the
//! binary and hex entry points against each other.
//!
#[cfg(test)]
mod codec_tests {
    use coin_codec::{
        create_chain, Chain, ChainConfig, FromHex, ScriptType, ToHex, HEADER_SIZE,
    };
    use std::io::Cursor;

    /// the reference network's genesis block, 285 bytes
    const GENESIS_BLOCK: &str = "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c0101000000010000000000000000000000000000000000000000000000000000000000000000ffffffff4d04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73ffffffff0100f2052a01000000434104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac00000000";

    /// genesis header hash, in wire byte order
    const GENESIS_HASH: &str =
        "6fe28c0ab6f1b372c1a6a246ae63f74f931e8365e15a089c68d6190000000000";

    fn genesis_header_hex() -> &'static str {
        &GENESIS_BLOCK[..HEADER_SIZE * 2]
    }

    fn genesis_tx_hex() -> &'static str {
        // header, then the one-byte transaction count
        &GENESIS_BLOCK[HEADER_SIZE * 2 + 2..]
    }

    #[test]
    fn test_parse_genesis_block() {
        let chain = create_chain("Bitcoin", ChainConfig::default()).unwrap();
        let bytes = Vec::from_hex(GENESIS_BLOCK).unwrap();
        let mut cursor = Cursor::new(bytes);
        let block = chain.ds_parse_block(&mut cursor).unwrap();

        assert_eq!(block.header.version, 1);
        assert_eq!(block.header.prev_blockhash, [0u8; 32]);
        assert_eq!(block.header.time, 1231006505);
        assert_eq!(block.header.bits, 0x1d00ffff);
        assert_eq!(block.header.nonce, 2083236893);
        assert_eq!(
            block.header.merkle_root.to_hex(),
            "3ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a"
        );

        assert_eq!(block.txdata.len(), 1);
        let tx = &block.txdata[0];
        assert_eq!(tx.version, 1);
        assert_eq!(tx.lock_time, 0);
        assert_eq!(tx.input.len(), 1);
        assert_eq!(tx.input[0].script_sig.len(), 77);
        assert_eq!(tx.output.len(), 1);
        assert_eq!(tx.output[0].value, 50_0000_0000);
        assert!(chain.is_coinbase_tx(tx));
    }

    #[test]
    fn test_genesis_block_round_trip() {
        let chain = create_chain("Bitcoin", ChainConfig::default()).unwrap();
        let bytes = Vec::from_hex(GENESIS_BLOCK).unwrap();
        let mut cursor = Cursor::new(bytes.clone());
        let block = chain.ds_parse_block(&mut cursor).unwrap();
        assert_eq!(chain.serialize_block(&block).unwrap(), bytes);
    }

    #[test]
    fn test_genesis_header_hash() {
        let chain = create_chain("Bitcoin", ChainConfig::default()).unwrap();
        let bytes = Vec::from_hex(GENESIS_BLOCK).unwrap();

        // zero-copy hash over the buffer region at the cursor
        let cursor = Cursor::new(bytes);
        let hash = chain.ds_block_header_hash(&cursor).unwrap();
        assert_eq!(hash.to_hex(), GENESIS_HASH);

        // by-value hash of the parsed header must agree
        let header = chain.parse_block_header(genesis_header_hex()).unwrap();
        assert_eq!(header.block_hash().unwrap().to_hex(), GENESIS_HASH);
    }

    #[test]
    fn test_hex_entry_points_agree_with_binary() {
        let chain = create_chain("Bitcoin", ChainConfig::default()).unwrap();
        let bytes = Vec::from_hex(GENESIS_BLOCK).unwrap();
        let mut cursor = Cursor::new(bytes);
        let block = chain.ds_parse_block(&mut cursor).unwrap();

        let header = chain.parse_block_header(genesis_header_hex()).unwrap();
        assert_eq!(header, block.header);

        let tx = chain.parse_transaction(genesis_tx_hex()).unwrap();
        assert_eq!(tx, block.txdata[0]);
    }

    #[test]
    fn test_classify_genesis_output() {
        let chain = create_chain("Bitcoin", ChainConfig::default()).unwrap();
        let tx = chain.parse_transaction(genesis_tx_hex()).unwrap();
        match chain.parse_txout_script(&tx.output[0].script_pubkey) {
            ScriptType::Pay2PublicKey { pubkey } => {
                assert_eq!(pubkey.len(), 65);
                assert_eq!(pubkey[0], 0x04);
            }
            other => panic!("expected Pay2PublicKey, got {}", other),
        }
    }

    #[test]
    fn test_truncated_block_fails() {
        let chain = create_chain("Bitcoin", ChainConfig::default()).unwrap();
        let bytes = Vec::from_hex(GENESIS_BLOCK).unwrap();
        let mut cursor = Cursor::new(bytes[..bytes.len() - 1].to_vec());
        assert!(chain.ds_parse_block(&mut cursor).is_err());
    }

    #[test]
    fn test_registered_variants() {
        for (name, code3) in [
            ("Bitcoin", "BTC"),
            ("Testnet", "BC0"),
            ("Litecoin", "LTC"),
            ("Dogecoin", "DOGE"),
            ("Namecoin", "NMC"),
        ]
        .iter()
        {
            let chain = create_chain(name, ChainConfig::default()).unwrap();
            assert_eq!(chain.params().name.as_deref(), Some(*name));
            assert_eq!(chain.params().code3.as_deref(), Some(*code3));
        }
    }

    #[test]
    fn test_codec_shared_across_variants() {
        // the wire codec itself does not differ between these variants
        let bitcoin = create_chain("Bitcoin", ChainConfig::default()).unwrap();
        let dogecoin = create_chain("Dogecoin", ChainConfig::default()).unwrap();
        let tx = bitcoin.parse_transaction(genesis_tx_hex()).unwrap();
        assert_eq!(dogecoin.parse_transaction(genesis_tx_hex()).unwrap(), tx);
        assert_eq!(
            dogecoin.serialize_transaction(&tx).unwrap().to_hex(),
            genesis_tx_hex()
        );
    }
}
