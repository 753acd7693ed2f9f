#![no_main]

use fipshash::crypto::sponge::{Domain, sponge};
use libfuzzer_sys::fuzz_target;

// First two bytes pick the output length so squeezes cross several rate blocks.
fuzz_target!(|data: &[u8]| {
  let (out_len, msg) = match data {
    [a, b, rest @ ..] => (usize::from(u16::from_le_bytes([*a, *b])) % 1024, rest),
    _ => (32, data),
  };

  let ours = sponge(msg, Domain::Shake.suffix(), out_len * 8);

  use sha3::digest::{ExtendableOutput, Update, XofReader};
  let mut h = sha3::Shake256::default();
  h.update(msg);
  let mut reader = h.finalize_xof();
  let mut expected = vec![0u8; out_len];
  reader.read(&mut expected);

  assert_eq!(ours, expected);
});
