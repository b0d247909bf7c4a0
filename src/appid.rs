//! Stable appid derivation for non-Steam shortcuts
//!
//! Steam keys artwork, playtime and per-app configuration by a 32-bit appid.
//! For shortcuts the id is derived from the entry itself, so recomputing it
//! for the same name and executable always lands on the same artwork files.

/// Bit Steam sets on every shortcut appid to mark it as a non-Steam
/// application
const NON_STEAM_MASK: u32 = 0x8000_0000;

/// Derive the appid for a (name, executable) pair
///
/// CRC32 (standard polynomial) over the UTF-8 bytes of `name` concatenated
/// directly with `exe` - no separator - with the high bit forced set. Pure
/// function of its inputs.
pub fn app_id(name: &str, exe: &str) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(name.as_bytes());
    hasher.update(exe.as_bytes());
    hasher.finalize() | NON_STEAM_MASK
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_pair() {
        // zlib.crc32 of the concatenated pair, high bit set
        assert_eq!(
            app_id(
                "Minecraft Splitscreen",
                "/home/deck/.local/share/PollyMC/minecraft.sh"
            ),
            0x8BD5_69E7
        );
        assert_eq!(app_id("Half-Life 3", "/usr/bin/hl3"), 0xCF69_CC2F);
    }

    #[test]
    fn test_no_separator_between_inputs() {
        // the hash covers the raw concatenation, so shifting bytes between
        // name and exe cannot change the result
        assert_eq!(app_id("Hello", "World"), app_id("HelloW", "orld"));
        assert_eq!(app_id("Hello", "World"), app_id("", "HelloWorld"));
    }

    proptest! {
        #[test]
        fn prop_high_bit_always_set(name in ".*", exe in ".*") {
            prop_assert!(app_id(&name, &exe) & 0x8000_0000 != 0);
        }

        #[test]
        fn prop_deterministic(name in ".*", exe in ".*") {
            prop_assert_eq!(app_id(&name, &exe), app_id(&name, &exe));
        }
    }
}
