//! Type-safe generational identifiers (slotmap-style) for arenas.
//! All IDs use u64 = index (low 32 bits) | generation (high 32 bits). Index 0 = nil.
//! IDs are created by their owning arena/queue; slot reuse bumps generation so stale IDs are invalid.

use std::fmt;
use std::hash::Hash;

/// Stable 64-bit hash of a string. Used to derive decorative seeds from scene names.
pub const fn string_to_u64(s: &str) -> u64 {
    let mut hash: u64 = 0xA0761D6478BD642F;
    let bytes = s.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0xE7037ED1A0B428DB);
        hash = mix64(hash);
        i += 1;
    }

    mix64(hash ^ (bytes.len() as u64))
}

pub const fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^= x >> 31;
    x
}

// u64 layout: low 32 = index (0 = nil, 1.. = slot), high 32 = generation.
macro_rules! define_generational_id {
    ($type_name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $type_name(pub u64);

        impl $type_name {
            #[inline]
            pub const fn nil() -> Self {
                Self(0)
            }

            #[inline]
            pub const fn index(self) -> u32 {
                (self.0 & 0xFFFF_FFFF) as u32
            }

            #[inline]
            pub const fn generation(self) -> u32 {
                (self.0 >> 32) as u32
            }

            #[inline]
            pub const fn from_parts(index: u32, generation: u32) -> Self {
                Self((index as u64) | ((generation as u64) << 32))
            }

            #[inline]
            pub const fn as_u64(self) -> u64 {
                self.0
            }

            #[inline]
            pub const fn from_u64(value: u64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn is_nil(self) -> bool {
                self.0 == 0
            }
        }

        impl Default for $type_name {
            fn default() -> Self {
                Self::nil()
            }
        }

        impl fmt::Debug for $type_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($type_name), "({}:{})"),
                    self.index(),
                    self.generation()
                )
            }
        }

        impl fmt::Display for $type_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}:{}", self.index(), self.generation())
            }
        }
    };
}

define_generational_id!(
    TransformID,
    "Transform ID: allocated by TransformArena. Index + generation."
);
define_generational_id!(
    SceneID,
    "Scene ID: one per mounted scene instance. Index + generation."
);
define_generational_id!(
    TimerID,
    "Timer ID: allocated by TimerQueue. Index + generation."
);
define_generational_id!(
    MeshID,
    "Mesh ID: allocated by the graphics backend. Index + generation."
);
define_generational_id!(
    TextureID,
    "Texture ID: allocated by the graphics backend. Index + generation."
);

/// Correlates a resource request with the backend event that resolves it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct AssetRequestID(pub u128);

impl AssetRequestID {
    #[inline]
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Request ID for the `slot`-th asset of a transform. Stable for the transform's lifetime.
    /// The owner keeps all 64 bits, so index and generation both survive.
    #[inline]
    pub const fn for_owner(owner: TransformID, slot: u8) -> Self {
        Self(((owner.as_u64() as u128) << 8) | slot as u128)
    }

    #[inline]
    pub const fn owner(self) -> TransformID {
        TransformID::from_u64((self.0 >> 8) as u64)
    }

    #[inline]
    pub const fn slot(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Deterministic seed for a named decorative element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SeedKey(pub u64);

impl SeedKey {
    pub const fn from_name(name: &str) -> Self {
        Self(string_to_u64(name))
    }

    /// Mixes a base seed with a name so one config seed can feed several elements.
    pub const fn derive(base: u64, name: &str) -> Self {
        Self(mix64(base ^ string_to_u64(name)))
    }
}
