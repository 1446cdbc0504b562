use eframe::egui::Color32;

pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(0x21, 0x23, 0x37);
pub const GRID_LINE: Color32 = Color32::from_rgb(0x2c, 0x2f, 0x47);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0x60, 0xcb, 0xff);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(0x3a, 0x9b, 0xd9);
pub const DEAD_SNAKE: Color32 = Color32::from_rgb(0x7a, 0x7a, 0x7a);
pub const FOOD: Color32 = Color32::from_rgb(0xff, 0x00, 0x3d);
