//! `DnsRecordClient` 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{DnsRecordClient, ErrorContext};
use crate::types::TxtRecord;

use super::{BunnyDnsRecord, BunnyDnsZone, BunnyProvider, NewDnsRecordRequest, TXT_RECORD_TYPE};

#[async_trait]
impl DnsRecordClient for BunnyProvider {
    async fn create_txt_record(&self, zone_id: i64, record: &TxtRecord) -> Result<i64> {
        let body = NewDnsRecordRequest {
            id: record.id,
            record_type: TXT_RECORD_TYPE,
            value: &record.value,
            name: &record.name,
        };

        let ctx = ErrorContext {
            domain: Some(zone_id.to_string()),
            ..Default::default()
        };

        let text = self
            .put(&format!("/dnszone/{zone_id}/records"), &body, ctx)
            .await?;

        // 响应体是新建的记录；没有可用的 Id 时沿用请求中的 id
        let id = serde_json::from_str::<BunnyDnsRecord>(&text).map_or(record.id, |created| created.id);

        log::info!(
            "Created TXT record {} (id {id}) in zone {zone_id}",
            record.name
        );
        Ok(id)
    }

    async fn delete_record(&self, zone_id: i64, record_id: i64) -> Result<()> {
        let ctx = ErrorContext {
            record_id: Some(record_id.to_string()),
            domain: Some(zone_id.to_string()),
        };

        self.delete(&format!("/dnszone/{zone_id}/records/{record_id}"), ctx)
            .await?;

        log::info!("Deleted record {record_id} from zone {zone_id}");
        Ok(())
    }

    async fn find_txt_records(&self, zone_id: i64, name: &str, value: &str) -> Result<Vec<i64>> {
        let ctx = ErrorContext {
            domain: Some(zone_id.to_string()),
            ..Default::default()
        };

        let zone: BunnyDnsZone = self.get(&format!("/dnszone/{zone_id}"), ctx).await?;
        log::debug!(
            "Zone {zone_id} ({}) has {} records",
            zone.domain,
            zone.records.len()
        );

        Ok(zone
            .records
            .iter()
            .filter(|r| r.record_type == TXT_RECORD_TYPE && r.value == value && same_name(&r.name, name))
            .map(|r| r.id)
            .collect())
    }
}

/// 记录名比较，忽略大小写和结尾的点
fn same_name(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}
