//! Digital-marketing campaigns dataset (`marketing_digital.csv`).
//!
//! The funnel columns are chained derivations: clicks are a low-CTR beta
//! fraction of impressions, conversions a low fraction of clicks, and the
//! cost/return ratios are guarded against empty funnels.

use massa_core::{ratio_pct, round_to, DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "marketing",
        "marketing_digital.csv",
        vec![
            FieldSpec::sampled("ID_Campanha", Sampler::SeqId { prefix: "CAMP", width: 5 }),
            FieldSpec::sampled("Nome_Campanha", Sampler::Fake(FakeKind::Phrase { words: 4 })),
            FieldSpec::sampled("Data_Inicio", Sampler::DateWithinDays { back: 365 }),
            FieldSpec::derived("Data_Fim", data_fim),
            FieldSpec::sampled(
                "Canal",
                Sampler::weighted(
                    &["Google Ads", "Facebook", "Instagram", "LinkedIn", "Email Marketing"],
                    &[0.3, 0.25, 0.2, 0.15, 0.1],
                ),
            ),
            FieldSpec::sampled(
                "Investimento",
                Sampler::LogNormal { location: 7.0, scale: 1.2, decimals: 2 },
            ),
            FieldSpec::derived("Impressoes", impressoes),
            FieldSpec::derived("Cliques", cliques),
            FieldSpec::derived("Conversoes", conversoes),
            FieldSpec::derived("CTR", ctr),
            FieldSpec::derived("CPC", cpc),
            FieldSpec::derived("CPA", cpa),
            FieldSpec::derived("ROI", roi),
            FieldSpec::derived("Publico_Alvo", publico_alvo),
            FieldSpec::sampled(
                "Segmento",
                Sampler::weighted(
                    &["18-24", "25-34", "35-44", "45-54", "55+"],
                    &[0.2, 0.3, 0.25, 0.15, 0.1],
                ),
            ),
            FieldSpec::sampled(
                "Status",
                Sampler::weighted(
                    &["Ativa", "Pausada", "Finalizada", "Cancelada"],
                    &[0.4, 0.2, 0.35, 0.05],
                ),
            ),
            FieldSpec::sampled("Responsavel", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::sampled(
                "Objetivo",
                Sampler::choice(&["Aumento Vendas", "Geração Leads", "Brand Awareness", "Retenção"]),
            ),
            FieldSpec::derived("Metricas_Adicionais", metricas_adicionais),
        ],
    )
}

/// Average value of one conversion, used for the return estimate.
const VALOR_CONVERSAO: f64 = 50.0;

fn data_fim(row: &Row, ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Inicio").and_then(Value::as_date) {
        Some(inicio) => Value::Date(inicio + chrono::Duration::days(ctx.int_range(7, 90))),
        None => Value::Null,
    }
}

fn impressoes(_row: &Row, ctx: &mut dyn Draw) -> Value {
    Value::Int(ctx.log_normal(12.0, 1.5) as i64)
}

/// Low click-through: Beta(2, 20) of impressions.
fn cliques(row: &Row, ctx: &mut dyn Draw) -> Value {
    let impressoes = row.get_f64("Impressoes").unwrap_or(0.0);
    Value::Int((impressoes * ctx.beta(2.0, 20.0)) as i64)
}

/// Low conversion: Beta(1, 10) of clicks.
fn conversoes(row: &Row, ctx: &mut dyn Draw) -> Value {
    let cliques = row.get_f64("Cliques").unwrap_or(0.0);
    Value::Int((cliques * ctx.beta(1.0, 10.0)) as i64)
}

fn ctr(row: &Row, _ctx: &mut dyn Draw) -> Value {
    let cliques = row.get_f64("Cliques").unwrap_or(0.0);
    let impressoes = row.get_f64("Impressoes").unwrap_or(0.0);
    Value::Float(round_to(ratio_pct(cliques, impressoes), 2))
}

fn cpc(row: &Row, _ctx: &mut dyn Draw) -> Value {
    Value::Float(cost_per(row, "Cliques"))
}

fn cpa(row: &Row, _ctx: &mut dyn Draw) -> Value {
    Value::Float(cost_per(row, "Conversoes"))
}

/// Investment divided by a funnel count, 0 when the funnel is empty.
fn cost_per(row: &Row, column: &str) -> f64 {
    let investimento = row.get_f64("Investimento").unwrap_or(0.0);
    let contagem = row.get_f64(column).unwrap_or(0.0);
    if contagem == 0.0 {
        0.0
    } else {
        round_to(investimento / contagem, 2)
    }
}

fn roi(row: &Row, _ctx: &mut dyn Draw) -> Value {
    let investimento = row.get_f64("Investimento").unwrap_or(0.0);
    let conversoes = row.get_f64("Conversoes").unwrap_or(0.0);
    let retorno = conversoes * VALOR_CONVERSAO - investimento;
    Value::Float(round_to(ratio_pct(retorno, investimento), 2))
}

fn publico_alvo(_row: &Row, ctx: &mut dyn Draw) -> Value {
    Value::Text(format!("{} pessoas", ctx.int_range(10_000, 100_000)))
}

fn metricas_adicionais(_row: &Row, ctx: &mut dyn Draw) -> Value {
    Value::Text(format!(
        "Engajamento: {}%, Bounce Rate: {}%",
        ctx.int_range(1, 20),
        ctx.int_range(30, 80)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use massa_generator::RowGenerator;

    #[test]
    fn test_funnel_is_monotonic() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(500) {
            let impressoes = row.get_i64("Impressoes").unwrap();
            let cliques = row.get_i64("Cliques").unwrap();
            let conversoes = row.get_i64("Conversoes").unwrap();
            assert!(cliques <= impressoes);
            assert!(conversoes <= cliques);
        }
    }

    #[test]
    fn test_ratios_never_nan_and_guard_zero() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(2000) {
            let ctr = row.get_f64("CTR").unwrap();
            let cpc = row.get_f64("CPC").unwrap();
            let cpa = row.get_f64("CPA").unwrap();
            assert!(!ctr.is_nan() && !cpc.is_nan() && !cpa.is_nan());

            if row.get_i64("Cliques").unwrap() == 0 {
                assert_eq!(cpc, 0.0);
            }
            if row.get_i64("Conversoes").unwrap() == 0 {
                assert_eq!(cpa, 0.0);
            }
        }
    }

    #[test]
    fn test_zero_denominator_yields_zero() {
        // Direct check of the guard, independent of sampled luck.
        let mut row = Row::with_capacity(3);
        row.push("Investimento", Value::Float(500.0));
        row.push("Cliques", Value::Int(0));
        assert_eq!(cost_per(&row, "Cliques"), 0.0);
    }
}
