use chrono::{DateTime, Duration, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::entities::ResellerRecord;

const UTF8_BOM: &str = "\u{feff}";

/// Brasília has no DST since 2019; a fixed UTC−03:00 is exact.
const BRASILIA_UTC_OFFSET_HOURS: i64 = -3;

pub const CSV_HEADERS: [&str; 18] = [
    "ID",
    "Nome Completo",
    "Empresa/Loja",
    "CNPJ",
    "Cidade/Estado",
    "Telefone",
    "Email",
    "Instagram/Redes",
    "Tempo de Mercado",
    "Entende Propósito",
    "Vende Calçados/Vestuário",
    "Forma de Venda",
    "O que chamou atenção",
    "Segue Padrões da Marca",
    "Pares por Mês",
    "Status",
    "Data de Cadastro",
    "Data de Atualização",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResellerExport {
    pub file_name: String,
    pub content: Vec<u8>,
    pub row_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum CsvExportError {
    #[error("CSV write failed: {0}")]
    Write(String),
}

pub fn export_file_name(generated_at: DateTime<Utc>) -> String {
    format!("revendedores_{}.csv", generated_at.format("%Y-%m-%d"))
}

fn local_date(at: DateTime<Utc>) -> String {
    (at + Duration::hours(BRASILIA_UTC_OFFSET_HOURS))
        .format("%d/%m/%Y")
        .to_string()
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn row_fields(row: &ResellerRecord) -> [String; 18] {
    [
        row.id.to_string(),
        row.full_name.clone(),
        text(&row.business_name).to_string(),
        text(&row.tax_id).to_string(),
        row.city_state.clone(),
        row.phone.clone(),
        text(&row.email).to_string(),
        text(&row.social_handle).to_string(),
        text(&row.years_in_market).to_string(),
        row.understands_purpose
            .map(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        row.sells_footwear_apparel
            .map(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        row.sales_channel
            .map(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        text(&row.brand_attraction).to_string(),
        row.follows_brand_standards
            .map(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        text(&row.monthly_volume).to_string(),
        row.status.as_str().to_string(),
        local_date(row.created_at),
        row.updated_at.map(local_date).unwrap_or_default(),
    ]
}

/// Renders rows in the order given: `;`-separated, every cell quoted,
/// `\n` line endings, BOM-prefixed UTF-8.
pub fn render_csv(
    rows: &[ResellerRecord],
    generated_at: DateTime<Utc>,
) -> Result<ResellerExport, CsvExportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.as_bytes().to_vec());

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| CsvExportError::Write(e.to_string()))?;

    for row in rows {
        writer
            .write_record(row_fields(row))
            .map_err(|e| CsvExportError::Write(e.to_string()))?;
    }

    let content = writer
        .into_inner()
        .map_err(|e| CsvExportError::Write(e.to_string()))?;

    Ok(ResellerExport {
        file_name: export_file_name(generated_at),
        content,
        row_count: rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::reseller_fixtures::{fixed_now, full_record, record};
    use chrono::TimeZone;

    fn lines(export: &ResellerExport) -> Vec<String> {
        let text = String::from_utf8(export.content.clone()).unwrap();
        let body = text.strip_prefix(UTF8_BOM).unwrap();
        body.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn starts_with_bom_and_header() {
        let export = render_csv(&[], fixed_now()).unwrap();

        assert!(export.content.starts_with(&[0xEF, 0xBB, 0xBF]));
        let lines = lines(&export);
        assert_eq!(
            lines[0],
            "\"ID\";\"Nome Completo\";\"Empresa/Loja\";\"CNPJ\";\"Cidade/Estado\";\"Telefone\";\
             \"Email\";\"Instagram/Redes\";\"Tempo de Mercado\";\"Entende Propósito\";\
             \"Vende Calçados/Vestuário\";\"Forma de Venda\";\"O que chamou atenção\";\
             \"Segue Padrões da Marca\";\"Pares por Mês\";\"Status\";\"Data de Cadastro\";\
             \"Data de Atualização\""
        );
        assert_eq!(export.row_count, 0);
    }

    #[test]
    fn quotes_every_cell_and_doubles_inner_quotes() {
        let export = render_csv(&[full_record(9)], fixed_now()).unwrap();
        let lines = lines(&export);

        assert_eq!(
            lines[1],
            "\"9\";\"Maria \"\"Mari\"\" Silva\";\"Calçados; Bom Passo\";\"12.345.678/0001-90\";\
             \"Recife, PE\";\"81988887777\";\"maria@bompasso.com.br\";\"@bompasso\";\"5 anos\";\
             \"sim\";\"sim\";\"mistos\";\"Preço justo\";\"nao\";\"300 pares\";\"aprovado\";\
             \"10/03/2025\";\"12/03/2025\""
        );
        // trailing terminator leaves one empty element
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "");
    }

    #[test]
    fn absent_fields_render_empty() {
        let export = render_csv(&[record(1, "Ana", None, fixed_now())], fixed_now()).unwrap();
        let lines = lines(&export);

        assert_eq!(
            lines[1],
            "\"1\";\"Ana\";\"\";\"\";\"São Paulo, SP\";\"11999998888\";\"\";\"\";\"\";\"\";\"\";\
             \"\";\"\";\"\";\"\";\"pendente\";\"10/03/2025\";\"\""
        );
    }

    #[test]
    fn dates_use_brasilia_day() {
        // 01:30 UTC is still the previous day in Brasília
        let early = Utc.with_ymd_and_hms(2025, 1, 1, 1, 30, 0).unwrap();
        assert_eq!(local_date(early), "31/12/2024");

        let later = Utc.with_ymd_and_hms(2025, 1, 1, 3, 0, 0).unwrap();
        assert_eq!(local_date(later), "01/01/2025");
    }

    #[test]
    fn file_name_uses_utc_date() {
        let at = Utc.with_ymd_and_hms(2025, 7, 4, 23, 59, 0).unwrap();
        assert_eq!(export_file_name(at), "revendedores_2025-07-04.csv");
    }

    #[test]
    fn keeps_row_order() {
        let rows = vec![
            record(3, "C", Some(1), fixed_now()),
            record(1, "A", Some(9), fixed_now()),
        ];
        let export = render_csv(&rows, fixed_now()).unwrap();
        let lines = lines(&export);

        assert!(lines[1].starts_with("\"3\""));
        assert!(lines[2].starts_with("\"1\""));
        assert_eq!(export.row_count, 2);
    }
}
