//! Customer base dataset (`dados_clientes.csv`).

use massa_core::{round_to, DatasetSpec, Draw, FakeKind, FieldSpec, Row, Sampler, Value};

pub fn spec() -> DatasetSpec {
    DatasetSpec::new(
        "clientes",
        "dados_clientes.csv",
        vec![
            FieldSpec::sampled("ID_Cliente", Sampler::SeqId { prefix: "CLI", width: 6 }),
            FieldSpec::sampled("Nome", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::derived("CPF_CNPJ", cpf_cnpj),
            FieldSpec::sampled("Email", Sampler::Fake(FakeKind::Email)),
            FieldSpec::sampled("Telefone", Sampler::Fake(FakeKind::Phone)),
            FieldSpec::sampled("Data_Cadastro", Sampler::DateWithinDays { back: 1825 }),
            FieldSpec::derived("Data_Ultima_Compra", data_ultima_compra).absent(0.2),
            FieldSpec::derived("Valor_Total_Compras", valor_total_compras),
            FieldSpec::derived("Numero_Pedidos", numero_pedidos),
            FieldSpec::sampled("Cidade", Sampler::Fake(FakeKind::City)),
            FieldSpec::sampled("Estado", Sampler::Fake(FakeKind::StateAbbr)),
            FieldSpec::sampled("CEP", Sampler::Fake(FakeKind::Cep)),
            FieldSpec::sampled("Idade", Sampler::IntRange { min: 18, max: 80 }),
            FieldSpec::sampled(
                "Genero",
                Sampler::weighted(&["Masculino", "Feminino", "Outro"], &[0.48, 0.5, 0.02]),
            ),
            FieldSpec::sampled(
                "Renda_Estimada",
                Sampler::LogNormal { location: 9.0, scale: 1.0, decimals: 2 },
            ),
            FieldSpec::sampled("Score_Credito", Sampler::IntRange { min: 0, max: 1000 }),
            FieldSpec::sampled(
                "Status",
                Sampler::weighted(
                    &["Ativo", "Inativo", "Bloqueado", "VIP"],
                    &[0.7, 0.25, 0.03, 0.02],
                ),
            ),
            FieldSpec::sampled(
                "Preferencias",
                Sampler::sample_join(&["Eletrônicos", "Roupas", "Casa", "Esportes", "Livros"], 1, 3),
            ),
            FieldSpec::sampled(
                "Canal_Aquisicao",
                Sampler::weighted(
                    &["Site", "Indicação", "Redes Sociais", "Email Marketing", "Busca Orgânica"],
                    &[0.3, 0.2, 0.2, 0.15, 0.15],
                ),
            ),
        ],
    )
}

/// Mostly individuals (CPF); one in ten is a business (CNPJ).
fn cpf_cnpj(_row: &Row, ctx: &mut dyn Draw) -> Value {
    let kind = if ctx.chance(0.9) {
        FakeKind::Cpf
    } else {
        FakeKind::Cnpj
    };
    Value::Text(ctx.fake(&kind))
}

fn data_ultima_compra(row: &Row, ctx: &mut dyn Draw) -> Value {
    match row.get("Data_Cadastro").and_then(Value::as_date) {
        Some(cadastro) => Value::Date(cadastro + chrono::Duration::days(ctx.int_range(0, 730))),
        None => Value::Null,
    }
}

/// Customers who never purchased have no spend.
fn valor_total_compras(row: &Row, ctx: &mut dyn Draw) -> Value {
    if row.get("Data_Ultima_Compra").is_some_and(|v| !v.is_null()) {
        Value::Float(round_to(ctx.log_normal(7.0, 1.5), 2))
    } else {
        Value::Float(0.0)
    }
}

fn numero_pedidos(row: &Row, ctx: &mut dyn Draw) -> Value {
    if row.get_f64("Valor_Total_Compras").unwrap_or(0.0) > 0.0 {
        Value::Int(ctx.int_range(1, 50))
    } else {
        Value::Int(0)
    }
}
