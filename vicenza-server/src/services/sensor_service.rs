use std::sync::Arc;
use std::time::Duration;
use std::{fs, io};

use anyhow::{Context, anyhow};
use rumqttc::tokio_rustls::rustls::{ClientConfig, RootCertStore};
use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS, TlsConfiguration, Transport};
use rustls_pemfile::{Item, certs, read_one};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::broadcast::Sender;
use vicenza_api::models::SensorReadingResponse;

use crate::configs::{Gateway, GatewayAuth};
use crate::handles::ServiceEvent;
use crate::models::SensorReading;
use crate::repositories::SensorReadingRepository;

/// Message published by the sensor board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SensorPayload {
    #[serde(alias = "tempRoom")]
    pub temp_room: f32,
    #[serde(alias = "humRoom")]
    pub hum_room: f32,
    #[serde(alias = "tempOut")]
    pub temp_out: f32,
    pub lux: f32,
    #[serde(alias = "ldrRaw")]
    pub ldr_raw: i32,
    /// Unix seconds, absent when the board has no clock
    #[serde(default)]
    pub timestamp: Option<i64>,
}

pub struct SensorService {
    repository: Arc<SensorReadingRepository>,
    sender: Sender<ServiceEvent>,
}

impl SensorService {
    pub fn new(repository: Arc<SensorReadingRepository>, sender: Sender<ServiceEvent>) -> Self {
        Self { repository, sender }
    }

    /// Connects to the broker and stores every reading published on the
    /// configured topic. The event loop runs on its own task.
    pub async fn listen(self: Arc<Self>, gateway: Gateway) -> anyhow::Result<()> {
        let mut options = MqttOptions::new(&gateway.client_id, &gateway.host, gateway.port);
        options.set_keep_alive(Duration::from_secs(5));

        if let Some(auth) = &gateway.auth {
            let tls_config = Self::tls_config(auth)?;
            options.set_transport(Transport::Tls(TlsConfiguration::from(tls_config)));
        }

        let (client, mut event_loop) = AsyncClient::new(options, 10);
        client.subscribe(&gateway.topic, QoS::AtLeastOnce).await?;

        tracing::info!("subscribe topic {} on {}:{}", gateway.topic, gateway.host, gateway.port);

        tokio::spawn(async move {
            // The client must outlive the loop, dropping it closes the connection
            let _client = client;
            loop {
                match event_loop.poll().await {
                    Ok(Event::Incoming(Packet::Publish(publish))) => {
                        self.ingest(&publish.payload).await;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!("MQTT error: {}", e);
                        tokio::time::sleep(Duration::from_secs(1)).await;
                    }
                }
            }
        });

        Ok(())
    }

    /// Stores one published payload and announces it to live subscribers.
    /// Malformed payloads and storage failures are logged and dropped.
    pub async fn ingest(&self, payload: &[u8]) -> Option<SensorReading> {
        let data = match serde_json::from_slice::<SensorPayload>(payload) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Dropping malformed sensor payload: {}", e);
                return None;
            }
        };

        tracing::debug!("Receive: {:?}", data);

        match self.save(&data).await {
            Ok(reading) => {
                tracing::info!("Saved sensor reading {} captured at {}", reading.id, reading.timestamp);

                // No live subscriber is not an error
                let _ = self
                    .sender
                    .send(ServiceEvent::SensorReadingCreate(SensorReadingResponse::from(reading.clone())));

                Some(reading)
            }
            Err(e) => {
                tracing::error!("Error saving sensor reading: {}", e);
                None
            }
        }
    }

    async fn save(&self, data: &SensorPayload) -> anyhow::Result<SensorReading> {
        let now = OffsetDateTime::now_utc();
        let reading = SensorReading {
            id: 0,
            temp_room: data.temp_room,
            hum_room: data.hum_room,
            temp_out: data.temp_out,
            lux: data.lux,
            ldr_raw: data.ldr_raw,
            timestamp: data.timestamp.unwrap_or(now.unix_timestamp()),
            created_at: now,
        };

        let mut tx = self.repository.get_pool().begin().await?;
        let id = self.repository.create(&reading, &mut tx).await?;
        tx.commit().await?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| anyhow!("reading {id} vanished after insert"))
    }

    fn tls_config(auth: &GatewayAuth) -> anyhow::Result<ClientConfig> {
        let mut root_cert_store = RootCertStore::empty();
        root_cert_store.add_parsable_certificates(rustls_native_certs::load_native_certs().certs);

        let certs = certs(&mut io::BufReader::new(
            fs::File::open(&auth.cert_path).with_context(|| format!("open {}", auth.cert_path))?,
        ))
        .collect::<Result<Vec<_>, _>>()?;

        let mut key_buffer = io::BufReader::new(
            fs::File::open(&auth.key_path).with_context(|| format!("open {}", auth.key_path))?,
        );
        let key = loop {
            match read_one(&mut key_buffer)? {
                Some(Item::Sec1Key(key)) => break key.into(),
                Some(Item::Pkcs1Key(key)) => break key.into(),
                Some(Item::Pkcs8Key(key)) => break key.into(),
                None => return Err(anyhow!("no keys found or encrypted keys not supported")),
                _ => {}
            }
        };

        Ok(ClientConfig::builder()
            .with_root_certificates(root_cert_store)
            .with_client_auth_cert(certs, key)?)
    }
}
