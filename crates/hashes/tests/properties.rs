use fipshash::{
  Digest,
  crypto::{Keccak256, Sha3_256, Sha256},
};
use proptest::prelude::*;

mod common;

type HashFn = fn(&[u8]) -> [u8; 32];

const ALL: &[(&str, HashFn)] = &[
  ("sha256", fipshash::sha256),
  ("sha3_256", fipshash::sha3_256),
  ("keccak256", fipshash::keccak256),
];

#[test]
fn output_is_always_32_bytes() {
  assert_eq!(<Sha256 as Digest>::OUTPUT_SIZE, 32);
  assert_eq!(<Sha3_256 as Digest>::OUTPUT_SIZE, 32);
  assert_eq!(<Keccak256 as Digest>::OUTPUT_SIZE, 32);

  for &(name, f) in ALL {
    for len in [0usize, 1, 64, 136, 1000] {
      let d = f(&common::pattern(len));
      assert_eq!(d.len(), 32, "{name} len={len}");
    }
  }
}

#[test]
fn single_bit_flips_change_digest() {
  for &(name, f) in ALL {
    for len in [1usize, 55, 64, 136] {
      let base = common::pattern(len);
      let reference = f(&base);
      for bit in 0..len * 8 {
        let mut flipped = base.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);
        assert_ne!(f(&flipped), reference, "{name} len={len} bit={bit}");
      }
    }
  }
}

#[test]
fn sha3_and_keccak_never_collide_on_corpus() {
  for s in common::STRINGS {
    assert_ne!(fipshash::sha3_256(s.as_bytes()), fipshash::keccak256(s.as_bytes()), "input={s:?}");
  }
  for &len in common::SPONGE_BOUNDARIES {
    let m = common::pattern(len);
    assert_ne!(fipshash::sha3_256(&m), fipshash::keccak256(&m), "len={len}");
  }
}

#[test]
fn digest_vectored_equals_concatenation() {
  let parts: [&[u8]; 3] = [b"hello", b" ", b"world"];
  assert_eq!(Sha256::digest_vectored(&parts), fipshash::sha256(b"hello world"));
  assert_eq!(Sha3_256::digest_vectored(&parts), fipshash::sha3_256(b"hello world"));
  assert_eq!(Keccak256::digest_vectored(&[]), fipshash::keccak256(b""));
}

#[test]
fn hashing_is_thread_independent() {
  let handles: Vec<_> = (0..4)
    .map(|t| {
      std::thread::spawn(move || {
        let m = common::pattern(100 + t);
        (m.clone(), fipshash::sha256(&m), fipshash::sha3_256(&m), fipshash::keccak256(&m))
      })
    })
    .collect();

  for h in handles {
    let (m, a, b, c) = h.join().unwrap();
    assert_eq!(a, fipshash::sha256(&m));
    assert_eq!(b, fipshash::sha3_256(&m));
    assert_eq!(c, fipshash::keccak256(&m));
  }
}

proptest! {
  #[test]
  fn digests_are_deterministic(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
    for &(_, f) in ALL {
      prop_assert_eq!(f(&data), f(&data));
    }
  }

  #[test]
  fn sha3_and_keccak_differ(data in proptest::collection::vec(any::<u8>(), 0..512)) {
    prop_assert_ne!(fipshash::sha3_256(&data), fipshash::keccak256(&data));
  }
}
