use std::ops::Mul;

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Copy> Rect<T> {
    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }

    pub fn cast<U: From<T>>(self) -> Rect<U> {
        Rect {
            x: U::from(self.x),
            y: U::from(self.y),
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Copy + std::ops::Add<Output = T>> Rect<T> {
    pub fn right(&self) -> T {
        self.x + self.width
    }

    pub fn bottom(&self) -> T {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(4, 8, 10, 12);
        assert_eq!(rect.right(), 14);
        assert_eq!(rect.bottom(), 20);
        assert_eq!(rect.size(), Size::new(10, 12));
    }

    #[test]
    fn test_rect_cast() {
        let rect: Rect<i64> = Rect::new(1i32, 2, 3, 4).cast();
        assert_eq!(rect, Rect::new(1i64, 2, 3, 4));
    }

    #[test]
    fn test_size_scale() {
        assert_eq!(Size::new(2.0f32, 3.0) * 2.0, Size::new(4.0, 6.0));
    }
}
