//! Coarse device classification used to scale the effect down on phones.

/// Lower-cased user-agent tokens that mark a constrained (mobile) device.
pub const MOBILE_UA_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Case-insensitive substring match of the user agent against [`MOBILE_UA_TOKENS`].
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if MOBILE_UA_TOKENS.iter().any(|t| ua.contains(t)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }

    /// Angular step used when sampling the heart curve.
    pub fn sample_step(self) -> f32 {
        match self {
            DeviceClass::Desktop => 0.1,
            DeviceClass::Mobile => 0.3,
        }
    }

    pub fn trail_len(self) -> usize {
        match self {
            DeviceClass::Desktop => 50,
            DeviceClass::Mobile => 20,
        }
    }

    /// Uniform scale applied to the heart silhouette on screen.
    pub fn heart_scale(self) -> f32 {
        match self {
            DeviceClass::Desktop => 1.0,
            DeviceClass::Mobile => 0.75,
        }
    }

    /// Click hearts spawned per tap or click.
    pub fn sprite_count(self) -> usize {
        match self {
            DeviceClass::Desktop => 14,
            DeviceClass::Mobile => 8,
        }
    }
}
