//! Element sets for tests and the CLI default.

/// Polar (90° inclination) test orbit, epoch 2024-01-01T12:00:00Z
pub const POLAR_TLE: &str = "1 99999U 24001A   24001.50000000  .00001103  00000-0  33518-4 0  9993
2 99999 90.00000   0.7036 0003481 300.0000   0.3331 15.07816962  1771";

#[cfg(test)]
pub const MOCK_TLE_DATA: &str = r#"
ISS (ZARYA)
1 25544U 98067A   24226.56250000  .00007211  00000-0  13379-3 0  9991
2 25544  51.6422 266.4643 0007888 121.4429 238.6624 15.49494792423450
"#;
