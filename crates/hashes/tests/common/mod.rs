#![allow(dead_code)]

/// Short and long ASCII messages, from single block to several blocks.
pub const STRINGS: &[&str] = &[
  "",
  "abc",
  "uitkzz76rir",
  "ewghe64hdsrf",
  "gerzhetjudrtfz",
  "arhz7nur6tbuubc",
  "dfsghrdetgwdhf354",
  "bh7ggfdg3647358734",
  "rureujrtghz4eri56zer",
  "326478zhergesfhjt43iz5h3789g0behjzw789345ithj8gfu9",
  "0iokl2j5t90ireg78rne3hz589uzhu9in0iokl2j5t90ireg78ruiw54jt3gjio9789uew43igkj3zthjbhw637z9u4ihjne3hz589uzhu9in",
  "0iokl2j5t90ireg78ruiw54jt3gjio9789uew43igkjb8e79u34gji894u3zthjbhw637z9u4ihjne3hz589uzhu9in0iokl2j5t90ireg78ruiw54jt3gjio9789uew43igkjb8e79u34gji894u3zthjbhw637z9u4ihjne3hz589uzhu9in0iokl2j5t90ireg78ruiw54jt3gjio9789uew43igkjb8e79u34gji894u3zthjbhw637z9u4ihjne3hz589uzhu9in0iokl2j5t90ireg78ruiw54jt3gjio9789uew43igkjb8e79u34gji894u3zthjbhw637z9u4ihjne3hz589uzhu9in",
];

/// Lengths around the SHA-256 block and length-field boundaries.
pub const SHA256_BOUNDARIES: &[usize] = &[0, 1, 55, 56, 63, 64, 65, 119, 120, 127, 128, 129];

/// Lengths around the sponge rate.
pub const SPONGE_BOUNDARIES: &[usize] = &[0, 1, 135, 136, 137, 271, 272, 273];

pub fn pattern(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8))
    .collect()
}
