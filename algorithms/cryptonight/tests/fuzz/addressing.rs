use bolero::check;
use cryptonight::kernels::constants::{SCRATCHPAD_SIZE, VEC_SIZE};
use cryptonight::kernels::scalar::{mul128, scratchpad_address};

#[test]
fn fuzz_scratchpad_addressing() {
    check!().with_type::<u64>().for_each(|&lane| {
        let addr = scratchpad_address(lane);

        assert_eq!(addr % VEC_SIZE, 0, "address must be block aligned");
        assert!(
            addr + VEC_SIZE <= SCRATCHPAD_SIZE,
            "address must leave room for a full block"
        );
        assert_eq!(
            scratchpad_address(addr as u64),
            addr,
            "masking must be idempotent"
        );
    });
}

#[test]
fn fuzz_wide_multiply() {
    check!().with_type::<(u64, u64)>().for_each(|&(x, y)| {
        let (hi, lo) = mul128(x, y);
        let wide = u128::from(x) * u128::from(y);

        assert_eq!(
            (u128::from(hi) << 64) | u128::from(lo),
            wide,
            "split product must reassemble into the wide product"
        );
    });
}
