use crate::point::{GeoBoundingBox, GeoPoint};

const SIZE: f64 = 500.0;

pub struct Svg {
    bbox: GeoBoundingBox,
    padding: f64,
    elements: Vec<String>,
}

impl Svg {
    pub fn init(b: &GeoBoundingBox) -> Self {
        Self {
            bbox: b.clone(),
            padding: 0.1,
            elements: Vec::new(),
        }
    }
    pub fn add_ring(&mut self, ring: &[GeoPoint], fill: &str, stroke: &str) {
        let s = ring
            .iter()
            .map(|p| {
                let (x, y) = self.transform(p);
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<String>>()
            .join(" ");
        let p = format!(
            r#"  <polygon points="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
            s, fill, stroke
        );
        self.elements.push(p);
    }
    pub fn add_point(&mut self, p: &GeoPoint) {
        let (x, y) = self.transform(p);
        self.elements.push(format!(
            r#"  <circle cx="{:.2}" cy="{:.2}" r="3" fill="black"/>"#,
            x, y
        ));
    }
    pub fn render(&self) -> String {
        let mut svg = format!(
            r#"<svg width="{0}" height="{0}" xmlns="http://www.w3.org/2000/svg">"#,
            SIZE
        );
        svg.push('\n');
        for e in &self.elements {
            svg.push_str(e);
            svg.push('\n');
        }
        svg.push_str("</svg>");
        svg
    }
    fn scale(&self) -> f64 {
        let padded_width = self.bbox.width() * (1.0 + 2.0 * self.padding);
        let padded_height = self.bbox.height() * (1.0 + 2.0 * self.padding);
        let extent = padded_width.max(padded_height);
        if extent > 0.0 { SIZE / extent } else { 1.0 }
    }
    fn transform(&self, p: &GeoPoint) -> (f64, f64) {
        let x = (p.lon - self.bbox.min.lon + self.bbox.width() * self.padding) * self.scale();
        let y = SIZE - (p.lat - self.bbox.min.lat + self.bbox.height() * self.padding) * self.scale();
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ring() {
        let ring = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ];
        let mut svg = Svg::init(&GeoBoundingBox::of(&ring).unwrap());
        svg.add_ring(&ring, "none", "red");
        svg.add_point(&GeoPoint::new(0.5, 0.5));
        let s = svg.render();
        assert!(s.starts_with("<svg"));
        assert!(s.ends_with("</svg>"));
        // padding 10% on each side: the origin lands at (41.67, 458.33)
        assert!(s.contains(r#"points="41.67,458.33 458.33,458.33"#), "{}", s);
        assert!(s.contains(r#"cx="250.00" cy="250.00""#), "{}", s);
    }

    #[test]
    fn test_single_point_bbox() {
        let p = GeoPoint::new(3.0, 4.0);
        let mut svg = Svg::init(&GeoBoundingBox::of(&[p]).unwrap());
        svg.add_point(&p);
        assert!(svg.render().contains(r#"cx="0.00" cy="500.00""#));
    }
}
