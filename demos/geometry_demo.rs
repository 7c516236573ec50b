//! Demonstration of the great-circle geometry functions

use gps_hover::{
    bearing, compass_direction_name, convert_latitude, convert_longitude, equirectangular_distance,
    great_circle_distance, GeoPosition, GeoResult, REFERENCE_POLES,
};

fn main() -> GeoResult<()> {
    println!("=== GPS Great-Circle Geometry Demo ===\n");

    // Receiver output in degrees and decimal minutes
    let home = GeoPosition::new(
        convert_latitude(30.0, 13.446, 'N')?,
        convert_longitude(92.0, 1.188, 'W')?,
    )?;
    println!("Home: {}", home);

    let targets = [
        ("Levee", GeoPosition::new(30.2600, -91.9900)?),
        ("Airfield", GeoPosition::new(30.2053, -91.9876)?),
        ("Seattle", GeoPosition::new(47.6062, -122.3321)?),
    ];

    for (name, target) in &targets {
        let heading = bearing(&home, target);
        let distance = great_circle_distance(&home, target);
        let approx = equirectangular_distance(&home, target);

        println!("\n{name}: {target}");
        println!("  Bearing:        {heading:.1}° ({})", compass_direction_name(heading));
        println!("  Great circle:   {:.1} m", distance);
        println!("  Equirectangular: {:.1} m", approx);
    }

    println!("\nMagnetic declination at home: {:.2}°", REFERENCE_POLES.declination(&home)?);

    Ok(())
}
