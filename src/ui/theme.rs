/// Fill used by the `dark` background regardless of palette.
pub const DARK_FILL: &str = "#141414";
/// Text color on the `dark` background.
pub const DARK_TEXT: &str = "#f5f5f0";
/// Accent (gold) on the `dark` background.
pub const DARK_ACCENT: &str = "#d4a853";

pub const GRADIENT_ANGLE_DEG: u16 = 135;

/// Faint dot pattern layered over the `textured` background.
pub const TEXTURE_OVERLAY: &str = "url('data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"100\"><rect width=\"100\" height=\"100\" fill=\"none\"/><circle cx=\"50\" cy=\"50\" r=\"0.5\" fill=\"%23888\" opacity=\"0.15\"/></svg>')";

pub const PHOTO_OVERLAY_IMAGE: &str = "/images/inspire/hero-bg.jpg";
pub const PHOTO_OVERLAY_OPACITY_PCT: u8 = 30;

pub const FRAME_BORDER_DARK: &str = "#333";
pub const FRAME_BORDER_LIGHT: &str = "#ddd";
