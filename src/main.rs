use clap::{Parser, Subcommand};
use radius_toolkit::error::{Error, Result};
use radius_toolkit::point::{GeoBoundingBox, GeoPoint};
use radius_toolkit::{RadiusCircle, geometry, polygon, read_geometry, reference, svg};

#[derive(Parser)]
#[command(about = "Delivery radius circles and geocoder polygons")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Largest outer ring across all geometries of a GeoJSON file
    Largest {
        path: String,
        #[arg(long)]
        svg: Option<String>,
    },
    /// Circle polygon around a center, printed as GeoJSON
    Circle {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long)]
        radius_km: f64,
        #[arg(long, default_value_t = radius_toolkit::DEFAULT_POINT_COUNT)]
        points: usize,
        #[arg(long)]
        wrap_longitude: bool,
        #[arg(long)]
        svg: Option<String>,
    },
}

fn write_svg(path: &str, ring: &[GeoPoint], center: Option<&GeoPoint>) -> Result<()> {
    let Some(mut bbox) = GeoBoundingBox::of(ring) else {
        return Ok(());
    };
    if let Some(c) = center {
        bbox = bbox.union(&GeoBoundingBox { min: *c, max: *c });
    }
    let mut svg = svg::Svg::init(&bbox);
    svg.add_ring(ring, "none", "red");
    if let Some(c) = center {
        svg.add_point(c);
    }
    std::fs::write(path, svg.render()).map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })?;
    log::info!("wrote {}", path);
    Ok(())
}

fn largest(path: &str, svg_path: Option<&str>) -> Result<()> {
    let geometries = read_geometry::read_file(path)?;
    let rings = geometries
        .iter()
        .filter_map(|g| geometry::extract_largest_outer_ring(Some(g)));
    let Some(ring) = geometry::largest_ring(rings) else {
        println!("no polygon");
        return Ok(());
    };
    polygon::info(&ring);
    println!("  points: {}", ring.len());
    println!("  planar: {:.8} deg^2", polygon::compute_area(&ring));
    println!("geodesic: {:.1} m^2 (geo crate)", reference::geodesic_area(&ring));
    if let Some(p) = svg_path {
        write_svg(p, &ring, None)?;
    }
    Ok(())
}

fn circle(center: GeoPoint, radius_km: f64, points: usize, wrap: bool, svg_path: Option<&str>) -> Result<()> {
    if !(radius_km > 0.0) {
        return Err(Error::InvalidArgument(format!("radius must be positive, got {}", radius_km)));
    }
    if points < 3 {
        return Err(Error::InvalidArgument(format!("need at least 3 points, got {}", points)));
    }
    log::info!("center: {}, radius: {} km, points: {}", center, radius_km, points);
    let mut circle = RadiusCircle::new(center, radius_km, points);
    if wrap {
        circle = circle.wrapped();
    }
    println!("{}", circle.to_geojson());
    if let Some(p) = svg_path {
        write_svg(p, &circle.ring, Some(&circle.center))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    match args.command {
        Command::Largest { path, svg } => largest(&path, svg.as_deref()),
        Command::Circle {
            lat,
            lon,
            radius_km,
            points,
            wrap_longitude,
            svg,
        } => circle(
            GeoPoint::new(lat, lon),
            radius_km,
            points,
            wrap_longitude,
            svg.as_deref(),
        ),
    }
}
