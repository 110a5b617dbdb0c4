//! Human-resources dataset (`recursos_humanos.csv`).

use massa_core::{DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "rh",
        "recursos_humanos.csv",
        vec![
            FieldSpec::sampled("ID_Funcionario", Sampler::SeqId { prefix: "FUN", width: 5 }),
            FieldSpec::sampled("Nome", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::sampled("CPF", Sampler::Fake(FakeKind::Cpf)),
            FieldSpec::sampled("Data_Admissao", Sampler::DateWithinDays { back: 3650 }),
            FieldSpec::sampled("Cargo", Sampler::Fake(FakeKind::JobTitle)),
            FieldSpec::sampled(
                "Salario",
                Sampler::LogNormal { location: 9.0, scale: 0.8, decimals: 2 },
            ),
            FieldSpec::sampled(
                "Departamento",
                Sampler::weighted(
                    &["Vendas", "TI", "RH", "Financeiro", "Operações"],
                    &[0.25, 0.2, 0.1, 0.15, 0.3],
                ),
            ),
            FieldSpec::sampled(
                "Status",
                Sampler::weighted(
                    &["Ativo", "Demitido", "Afastado", "Férias"],
                    &[0.8, 0.15, 0.03, 0.02],
                ),
            ),
            FieldSpec::derived("Data_Demissao", data_demissao).absent(0.8),
            FieldSpec::sampled("Idade", Sampler::IntRange { min: 18, max: 65 }),
            FieldSpec::sampled(
                "Genero",
                Sampler::weighted(&["Masculino", "Feminino", "Outro"], &[0.48, 0.5, 0.02]),
            ),
            FieldSpec::sampled(
                "Escolaridade",
                Sampler::weighted(
                    &["Ensino Fundamental", "Ensino Médio", "Superior", "Pós-graduação"],
                    &[0.1, 0.4, 0.4, 0.1],
                ),
            ),
            FieldSpec::sampled(
                "Estado_Civil",
                Sampler::choice(&["Solteiro", "Casado", "Divorciado", "Viúvo"]),
            ),
            FieldSpec::sampled("Dependentes", Sampler::IntRange { min: 0, max: 5 }),
            FieldSpec::derived("Horas_Extras", horas_extras),
            FieldSpec::sampled("Faltas", Sampler::IntRange { min: 0, max: 30 }),
            FieldSpec::sampled(
                "Avaliacao",
                Sampler::Uniform { min: 1.0, max: 5.0, decimals: 1 },
            ),
            FieldSpec::sampled(
                "Beneficios",
                Sampler::sample_join(
                    &["Vale Alimentação", "Plano de Saúde", "Vale Transporte", "Seguro de Vida"],
                    1,
                    4,
                ),
            ),
            FieldSpec::sampled("Cidade", Sampler::Fake(FakeKind::City)),
            FieldSpec::sampled("Estado", Sampler::Fake(FakeKind::StateAbbr)),
        ],
    )
}

/// Termination between one and ten years after admission; only a fifth of
/// the records carry one at all (the absence gate handles that).
fn data_demissao(row: &Row, ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Admissao").and_then(Value::as_date) {
        Some(admissao) => {
            Value::Date(admissao + chrono::Duration::days(ctx.int_range(365, 3650)))
        }
        None => Value::Null,
    }
}

/// Overtime for ~40% of employees, zero for the rest.
fn horas_extras(_row: &Row, ctx: &mut dyn Draw) -> Value {
    if ctx.chance(0.4) {
        Value::Int(ctx.int_range(0, 40))
    } else {
        Value::Int(0)
    }
}
