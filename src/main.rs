use tokio::io::BufReader;

use nameplate::{ClientService, NameplateConfig, NameplateDisplay, render_loop};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match NameplateConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid nameplate configuration");
            std::process::exit(2);
        }
    };
    tracing::info!(capacity = config.feed_capacity, lag_policy = ?config.lag_policy, "nameplate overlay starting");

    let service = ClientService::new(config);
    let updates = NameplateDisplay::new(&service).updates();
    let mut render_task = tokio::spawn(async move {
        let mut out = std::io::stdout();
        render_loop(updates, &mut out).await
    });

    // The render loop only finishes early on a feed or write error.
    let early = tokio::select! {
        result = &mut render_task => Some(result),
        pumped = service.pump(BufReader::new(tokio::io::stdin())) => {
            if let Err(e) = pumped {
                tracing::error!(error = %e, "stdin read failed");
            }
            None
        }
    };

    // Closing the feed ends the update stream.
    drop(service);
    let result = match early {
        Some(result) => result,
        None => render_task.await,
    };

    match result {
        Ok(Ok(frames)) => tracing::info!(frames, "nameplate feed closed"),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "nameplate render loop stopped");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "render loop panicked");
            std::process::exit(1);
        }
    }
}
