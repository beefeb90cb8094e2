use bolero::check;
use cryptonight::{absorb, Finalizer};

#[test]
fn fuzz_state_absorption() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let state = absorb(data);

        assert_eq!(absorb(data), state, "absorption must be deterministic");

        // Appending a byte changes the padding position, so the states
        // can only collide if the permutation itself is broken.
        let mut extended = data.clone();
        extended.push(0);
        assert_ne!(
            absorb(&extended)[..],
            state[..],
            "zero-extension must not collide"
        );
    });
}

#[test]
fn fuzz_finalizer_selection() {
    check!().with_type::<u8>().for_each(|&byte| {
        let finalizer = Finalizer::from_state_byte(byte);

        assert_eq!(
            finalizer,
            Finalizer::from_state_byte(byte & 3),
            "only the low two bits select the finalizer"
        );
        assert!(!finalizer.name().is_empty());
    });
}
