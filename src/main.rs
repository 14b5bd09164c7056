use mse_dashboard::{run_dashboard, DashboardConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cfg = DashboardConfig::load_or_default();
    run_dashboard(cfg)
}
