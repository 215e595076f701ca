use lzbase62::table::is_symbol_string;
use lzbase62::{
    compress, compress_bytes, compress_units, decompress, decompress_bytes, decompress_units,
    CompressChunks, DecompressChunks, Options,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_text_round_trip(s in any::<String>()) {
        let compressed = compress(&s);
        prop_assert!(is_symbol_string(&compressed));
        prop_assert_eq!(decompress(&compressed).unwrap(), s);
    }

    #[test]
    fn prop_repetitive_text_round_trip(word in "[a-zあ-お ]{1,8}", times in 1usize..200) {
        let s = word.repeat(times);
        prop_assert_eq!(decompress(&compress(&s)).unwrap(), s);
    }

    #[test]
    fn prop_bytes_round_trip(data in proptest::collection::vec(any::<u8>(), 0..2000)) {
        let compressed = compress_bytes(&data);
        prop_assert!(is_symbol_string(&compressed));
        prop_assert_eq!(decompress_bytes(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_units_round_trip(units in proptest::collection::vec(any::<u16>(), 0..2000)) {
        prop_assert_eq!(decompress_units(&compress_units(&units)).unwrap(), units);
    }

    #[test]
    fn prop_chunks_match_whole(s in "\\PC{0,400}", chunk_size in 1usize..64) {
        let options = Options::new().with_chunk_size(chunk_size);
        let whole = compress(&s);
        let chunked: String = CompressChunks::from_text(&s, options).collect();
        prop_assert_eq!(&chunked, &whole);

        let decoded: Result<Vec<String>, _> = DecompressChunks::new(&whole, options).collect();
        prop_assert_eq!(decoded.unwrap().concat(), s);
    }

    #[test]
    fn prop_decompress_never_panics(s in "[A-Za-z0-9]{0,64}") {
        // Arbitrary symbol strings either decode or fail cleanly.
        let _ = decompress(&s);
        let _ = decompress_units(&s);
    }
}
