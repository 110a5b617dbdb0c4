//! Manufacturing orders dataset (`producao_manufatura.csv`).

use chrono::NaiveTime;
use massa_core::{ratio_pct, round_to, DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "producao",
        "producao_manufatura.csv",
        vec![
            FieldSpec::sampled("ID_Ordem", Sampler::SeqId { prefix: "ORD", width: 6 }),
            FieldSpec::sampled("Produto", Sampler::Fake(FakeKind::Phrase { words: 3 })),
            FieldSpec::sampled(
                "Quantidade_Planejada",
                Sampler::IntRange { min: 100, max: 10_000 },
            ),
            FieldSpec::derived("Quantidade_Produzida", quantidade_produzida),
            FieldSpec::derived("Data_Inicio", data_inicio),
            FieldSpec::derived("Data_Fim", data_fim),
            FieldSpec::sampled(
                "Maquina",
                Sampler::weighted(
                    &["Máquina A", "Máquina B", "Máquina C", "Linha Automática 1", "Linha Automática 2"],
                    &[0.2, 0.2, 0.2, 0.2, 0.2],
                ),
            ),
            FieldSpec::sampled("Operador", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::derived("Tempo_Producao_Min", tempo_producao),
            FieldSpec::derived("Eficiencia", eficiencia),
            FieldSpec::derived("Defeitos", defeitos),
            FieldSpec::sampled(
                "Custo_Materia_Prima",
                Sampler::LogNormal { location: 8.0, scale: 1.0, decimals: 2 },
            ),
            FieldSpec::sampled(
                "Custo_Mao_Obra",
                Sampler::LogNormal { location: 7.0, scale: 0.8, decimals: 2 },
            ),
            FieldSpec::sampled(
                "Status",
                Sampler::weighted(
                    &["Concluída", "Em Andamento", "Parada", "Cancelada"],
                    &[0.6, 0.3, 0.08, 0.02],
                ),
            ),
            FieldSpec::sampled(
                "Linha_Producao",
                Sampler::RandId { prefix: "Linha ", min: 1, max: 10, width: 0 },
            ),
            FieldSpec::sampled(
                "Turno",
                Sampler::weighted(&["Manhã", "Tarde", "Noite"], &[0.4, 0.35, 0.25]),
            ),
            FieldSpec::sampled("Qualidade", Sampler::choice(&["A", "B", "C", "D"])),
            FieldSpec::sampled("Observacoes", Sampler::Fake(FakeKind::Sentence)).absent(0.8),
        ],
    )
}

/// Output is a Beta(8, 2) fraction of the plan, usually close to it.
fn quantidade_produzida(row: &Row, ctx: &mut dyn Draw) -> Value {
    let planejada = row.get_f64("Quantidade_Planejada").unwrap_or(0.0);
    Value::Int((planejada * ctx.beta(8.0, 2.0)) as i64)
}

/// Orders start at the top of the day; the minute resolution shows up in
/// the end timestamp.
fn data_inicio(_row: &Row, ctx: &mut dyn Draw) -> Value {
    Value::DateTime(ctx.date_within_days(180).and_time(NaiveTime::MIN))
}

fn data_fim(row: &Row, ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Inicio").and_then(Value::as_datetime) {
        Some(inicio) => Value::DateTime(inicio + chrono::Duration::minutes(ctx.int_range(1, 480))),
        None => Value::Null,
    }
}

/// Wall-clock production time, consistent with the start/end pair.
fn tempo_producao(row: &Row, _ctx: &mut dyn Draw) -> Value {
    let inicio = row.get("Data_Inicio").and_then(Value::as_datetime);
    let fim = row.get("Data_Fim").and_then(Value::as_datetime);
    match (inicio, fim) {
        (Some(inicio), Some(fim)) => Value::Int((fim - inicio).num_minutes()),
        _ => Value::Int(0),
    }
}

fn eficiencia(row: &Row, _ctx: &mut dyn Draw) -> Value {
    let produzida = row.get_f64("Quantidade_Produzida").unwrap_or(0.0);
    let planejada = row.get_f64("Quantidade_Planejada").unwrap_or(0.0);
    Value::Float(round_to(ratio_pct(produzida, planejada), 2))
}

/// Defects capped at 5% of output.
fn defeitos(row: &Row, ctx: &mut dyn Draw) -> Value {
    let produzida = row.get_f64("Quantidade_Produzida").unwrap_or(0.0);
    Value::Int(ctx.int_range(0, (produzida * 0.05) as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use massa_generator::RowGenerator;

    #[test]
    fn test_tempo_matches_timestamps() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(300) {
            let inicio = row.get("Data_Inicio").and_then(Value::as_datetime).unwrap();
            let fim = row.get("Data_Fim").and_then(Value::as_datetime).unwrap();
            let tempo = row.get_i64("Tempo_Producao_Min").unwrap();
            assert_eq!((fim - inicio).num_minutes(), tempo);
            assert!((1..=480).contains(&tempo));
        }
    }

    #[test]
    fn test_eficiencia_consistent() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(300) {
            let esperada = round_to(
                ratio_pct(
                    row.get_f64("Quantidade_Produzida").unwrap(),
                    row.get_f64("Quantidade_Planejada").unwrap(),
                ),
                2,
            );
            assert_eq!(row.get_f64("Eficiencia"), Some(esperada));
        }
    }

    #[test]
    fn test_defeitos_capped() {
        let mut generator = RowGenerator::new(spec(), Some(42)).unwrap();

        for row in generator.rows(300) {
            let produzida = row.get_i64("Quantidade_Produzida").unwrap();
            let defeitos = row.get_i64("Defeitos").unwrap();
            assert!(defeitos <= (produzida as f64 * 0.05) as i64);
        }
    }
}
