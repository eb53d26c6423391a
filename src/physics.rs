// 轴对齐包围盒（左上角坐标 + 尺寸）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

// 重叠区间在两个轴上的长度
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    // 严格相交判定：边缘恰好接触不算重叠
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    // 相交时返回两轴重叠长度，否则返回 None
    pub fn overlap(&self, other: &Aabb) -> Option<Overlap> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Overlap {
            x: self.right().min(other.right()) - self.x.max(other.x),
            y: self.bottom().min(other.bottom()) - self.y.max(other.y),
        })
    }
}

impl Overlap {
    // 横向重叠更大时按竖直方向分离；相等时走水平方向
    pub fn resolve_axis(&self) -> Axis {
        if self.x > self.y {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert_eq!(a.overlap(&right), None);
    }

    #[test]
    fn overlap_measures_intersection_interval() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(7.0, 4.0, 10.0, 10.0);
        assert_eq!(a.overlap(&b), Some(Overlap { x: 3.0, y: 6.0 }));
    }

    #[test]
    fn contained_box_overlaps_by_its_own_size() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(10.0, 20.0, 5.0, 8.0);
        assert_eq!(outer.overlap(&inner), Some(Overlap { x: 5.0, y: 8.0 }));
    }

    #[test]
    fn tie_resolves_horizontally() {
        assert_eq!(Overlap { x: 4.0, y: 4.0 }.resolve_axis(), Axis::Horizontal);
        assert_eq!(Overlap { x: 5.0, y: 4.0 }.resolve_axis(), Axis::Vertical);
        assert_eq!(Overlap { x: 3.0, y: 4.0 }.resolve_axis(), Axis::Horizontal);
    }

    #[test]
    fn nan_never_overlaps() {
        let a = Aabb::new(f32::NAN, 0.0, 10.0, 10.0);
        let b = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }
}
