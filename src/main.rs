use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use pinsvc_bridge::aggregator::structs::pin_service::PinService;
use pinsvc_bridge::api::api::api_service;
use pinsvc_bridge::api::structs::api_service_data::ApiServiceData;
use pinsvc_bridge::common::common::setup_logging;
use pinsvc_bridge::config::structs::configuration::Configuration;
use pinsvc_bridge::rpc::structs::cluster_client::ClusterClient;
use pinsvc_bridge::rpc::structs::http_rpc_transport::HttpRpcTransport;
use pinsvc_bridge::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let transport = match HttpRpcTransport::new(&config.cluster_rpc) {
                Ok(transport) => transport,
                Err(error) => {
                    error!("[BOOT] Unable to create the cluster RPC client: {}", error);
                    exit(1);
                }
            };
            info!("[BOOT] Cluster RPC endpoint: {}", config.cluster_rpc.endpoint);

            let service_span = tracing::info_span!("pinsvc");
            let pin_service = Arc::new(PinService::new(
                ClusterClient::new(Arc::new(transport)),
                &config.cluster_rpc,
                service_span.clone(),
            ));
            let api_data = Arc::new(ApiServiceData {
                pin_service,
                pinsvc_config: Arc::new(config.pinsvc.clone()),
                span: tracing::info_span!(parent: &service_span, "api"),
            });

            let addr: SocketAddr = match config.api_server.bind_address.parse() {
                Ok(addr) => addr,
                Err(error) => {
                    error!("[BOOT] Invalid bind address {}: {}", config.api_server.bind_address, error);
                    exit(1);
                }
            };
            let (api_handle, api_server) = match api_service(addr, api_data, &config.api_server) {
                Ok(server) => server,
                Err(error) => {
                    error!("[API] Unable to bind {}: {}", addr, error);
                    exit(1);
                }
            };
            let api_task = tokio::spawn(api_server);

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    api_handle.stop(true).await;
                    info!("[API] Server stopped");
                }
                result = api_task => {
                    match result {
                        Ok(Ok(())) => info!("[API] Server stopped"),
                        Ok(Err(error)) => error!("[API] Server failed: {}", error),
                        Err(error) => error!("[API] Server task failed: {}", error),
                    }
                }
            }

            Ok(())
        })
}
