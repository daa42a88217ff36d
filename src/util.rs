#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    log::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);
