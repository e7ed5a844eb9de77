/// Which virtual keys are currently held, used to drop auto-repeat key-downs
#[derive(Debug, Clone)]
pub struct KeyStateSet {
    held: [bool; Self::SIZE],
}

impl KeyStateSet {
    pub const SIZE: usize = 256;

    pub fn new() -> Self {
        Self {
            held: [false; Self::SIZE],
        }
    }

    pub fn is_held(&self, vk_code: u32) -> bool {
        Self::slot(vk_code).map(|i| self.held[i]).unwrap_or(false)
    }

    pub fn press(&mut self, vk_code: u32) {
        if let Some(i) = Self::slot(vk_code) {
            self.held[i] = true;
        }
    }

    pub fn release(&mut self, vk_code: u32) {
        if let Some(i) = Self::slot(vk_code) {
            self.held[i] = false;
        }
    }

    pub fn clear(&mut self) {
        self.held = [false; Self::SIZE];
    }

    // Codes outside the table are never tracked
    fn slot(vk_code: u32) -> Option<usize> {
        let i = vk_code as usize;
        (i < Self::SIZE).then_some(i)
    }
}

impl Default for KeyStateSet {
    fn default() -> Self {
        Self::new()
    }
}
