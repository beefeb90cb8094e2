use bolero::check;
use cryptonight::kernels::constants::VEC_SIZE;
use cryptonight::kernels::scalar::expand_round_keys;

#[test]
fn fuzz_key_schedule() {
    check!().with_type::<[u8; 32]>().for_each(|material| {
        let keys = expand_round_keys(material);

        assert_eq!(
            keys[0],
            material[..VEC_SIZE],
            "entry 0 must pass the material through"
        );
        assert_eq!(
            keys,
            expand_round_keys(material),
            "schedule must be deterministic"
        );
    });
}
