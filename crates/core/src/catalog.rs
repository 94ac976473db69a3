//! Static product catalog
//!
//! Read-only and defined independently of any user. Content refs are
//! opaque links to the hosted material; the core only stores them.

use std::sync::OnceLock;

use crate::models::{ContentItem, ContentKind, Product};

static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();

/// All products, in display order
pub fn products() -> &'static [Product] {
    CATALOG.get_or_init(|| vec![mente_milionaria(), mente_blindada()])
}

/// Find a product by id
pub fn find_product(product_id: &str) -> Option<&'static Product> {
    products().iter().find(|p| p.id == product_id)
}

fn drive_folder(id: &str) -> String {
    format!("https://drive.google.com/drive/folders/{id}?usp=sharing")
}

fn mente_milionaria() -> Product {
    let chapters: &[(&str, &str, &str, &str, u32, &str)] = &[
        (
            "intro",
            "Introdução Premium",
            "Boas-vindas, explicação rápida do uso da plataforma e link pro planner",
            "15 min",
            0,
            "11mk5pLaJqt2hFE0REHbPtGg1TNANlHoU",
        ),
        (
            "cap1",
            "Capítulo 1 – O Código da Mente Rara",
            "Desbloqueie os segredos da mentalidade dos novos ricos",
            "32 min",
            0,
            "1PXooMuIhVzfxotpf-GWI6jS1yKROvw4H",
        ),
        (
            "cap2",
            "Capítulo 2 – A Fórmula da Riqueza Interna",
            "Como cultivar abundância desde o interior",
            "28 min",
            0,
            "16Ye8asmg2yOb4RLyIuOqnasIdv-t32Qj",
        ),
        (
            "cap3",
            "Capítulo 3 – Reprogramação Antifraude Mental",
            "Elimine crenças limitantes de uma vez por todas",
            "25 min",
            3,
            "10RJ2rVQ7eOWwWP5AMd--DwcGAxKs60Ql",
        ),
        (
            "cap4",
            "Capítulo 4 – Rituais Diários de Mente Rica",
            "Construa hábitos que geram resultados exponenciais",
            "30 min",
            4,
            "1I95KfoCBWKrITtaPqh3wGm-qWGPnNBNd",
        ),
        (
            "cap5",
            "Capítulo 5 – Desbloqueio de Potencial",
            "Ative sua versão máxima e imparável",
            "27 min",
            5,
            "1HcjPH1YVjw7r4Uppe-BuAmfO5PHp3TBY",
        ),
        (
            "cap6",
            "Capítulo 6 – Plano de Ação: Riqueza em Movimento",
            "Estratégias práticas para implementação imediata",
            "35 min",
            6,
            "1vvlYkR3iyOIStGk3OUXfXf219ScMXC5J",
        ),
        (
            "cap7",
            "Capítulo 7 – Encerramento: Agora é Guerra",
            "Sua nova identidade está forjada",
            "20 min",
            7,
            "1kh8x6MTSZ-ybgdpTIanV9F-vT_MKRb00",
        ),
        (
            "cap8",
            "Capítulo 8 – Aceleração Final",
            "O último impulso para sua transformação completa",
            "22 min",
            8,
            "1NKZNrOKnUdkvSEhlQLHugkWeFY22lYQ8",
        ),
    ];

    let modules = chapters
        .iter()
        .map(|(id, title, description, duration, day, folder)| {
            ContentItem::new(id, title, description, ContentKind::Video)
                .with_duration(duration)
                .unlocks_on_day(*day)
                .with_content_ref(&drive_folder(folder))
        })
        .collect();

    let bonus = vec![
        ContentItem::new(
            "planner",
            "Planner Diário Personalizado",
            "Organize sua rotina de alta performance",
            ContentKind::Pdf,
        )
        .unlocks_on_day(3)
        .with_content_ref(&drive_folder("1Ql_AOEbevm7x95J0RLLAPSuvn_08_L95")),
        ContentItem::new(
            "wallpapers",
            "Wallpaper Pack Premium",
            "Para celular e PC - Mantenha o foco visual",
            ContentKind::Bundle,
        )
        .unlocks_on_day(3)
        .with_content_ref(&drive_folder("1ip5obetoPR9wosFs0xlEAMsfKNr1LbS9")),
        ContentItem::new(
            "frases",
            "Frases de Impacto - PDF",
            "Coleção imprimível de mindset poderoso",
            ContentKind::Pdf,
        )
        .unlocks_on_day(5)
        .with_content_ref(&drive_folder("1zlOz9CfeK0jk5rz9V7-3PpKvppMfpNX0")),
    ];

    Product {
        id: "mente-milionaria".to_string(),
        name: "Mente Milionária Express".to_string(),
        subtitle: "O Início da Revolução Interna".to_string(),
        description: "Um mergulho rápido, prático e violento em mentalidade de riqueza, \
                      digital e liberdade."
            .to_string(),
        modules,
        bonus,
    }
}

fn mente_blindada() -> Product {
    // One module per day; day N unlocks N-1 days after the grant.
    let days: &[(&str, &str, &str, &str)] = &[
        ("Despertar", "O primeiro passo para sua transformação mental", "25 min", "1iYicVgWn6011cbP9M5POuYp2tcHAHXPc"),
        ("Desconstrução", "Quebrando padrões limitantes do passado", "28 min", "1wGzTbndu3B3gzTpNKdH6MDfYrxPkHB0H"),
        ("Fundação", "Construindo bases sólidas para o novo você", "30 min", "1QZxMRoZATzzGheybkM1OVSxdZ2wOqSSA"),
        ("Força", "Desenvolvendo poder mental inabalável", "27 min", "1Qt8JUZxz3CfvbDdkdoxaNx4Y5DnS7yr3"),
        ("Foco", "Laser mental para resultados precisos", "32 min", "1CV04yRTYIQioFRkdvqSvTBI9yCoJxnuY"),
        ("Fluxo", "Entrando no estado de alta performance", "29 min", "18TFySD1K6uvAJeaWCl4SumQZPBd64iCN"),
        ("Fé", "Convicção inabalável em seu potencial", "26 min", "1nhlR1hIzT86bU8h3qSlHJP7p6Pk07ZYu"),
        ("Coragem", "Enfrentando medos com determinação", "31 min", "1ozKX_S44A9AZkhJk3skOIVWfU_lgjs2f"),
        ("Clareza", "Visão cristalina dos seus objetivos", "24 min", "1NmhB_TnRaoIuj7ePjk6RiZGmlhzDhqv4"),
        ("Conquista", "Mentalidade de vitória absoluta", "33 min", "11sA6-XF18WktXDVH1qTzBhpr-QttQQDr"),
        ("Consistência", "Disciplina que gera resultados exponenciais", "28 min", "1ZWqyItd96cjNmM1Fl6O_RiUMmxDAjFsz"),
        ("Criação", "Moldando sua realidade com propósito", "30 min", "1Hj0w8F20TZuBAg70ZYyjqEtvorGRIlI6"),
        ("Comando", "Liderança sobre sua própria vida", "27 min", "12OcafR-JgaZp6JbDkvQ_3kznfTNPMfWH"),
        ("Controle", "Domínio total sobre suas emoções", "29 min", "1L0QD9xUmVHscbEFS2XRaSW19knNwMbP9"),
        ("Disciplina", "A força que move montanhas", "35 min", "14DyR0PLrG_Od5Mz2JfGh8K8tmjWfYlpE"),
        ("Determinação", "Vontade inquebrantável de vencer", "26 min", "1mtfA2Bp590wNpKRZWf4P_9zfBqSAYROK"),
        ("Dominância", "Supremacia mental sobre obstáculos", "31 min", "1x8BIdONgesAlBHOu80kpxbQfuKwwqlOv"),
        ("Evolução", "Transformação contínua e imparável", "28 min", "1JD2NUXptTSXgzoY966kaUQO6fzF8h6G0"),
        ("Excelência", "Padrão de qualidade superior", "32 min", "1T3G0p8DXxcP8VJ6zi__9nn9crgOI2klP"),
        ("Vitória", "O triunfo da nova versão de você", "34 min", "1cQCbi-gqPxeOv2htzGiNOIpodl1oe-VP"),
        ("Ritual de Fogo", "A cerimônia final da sua transformação", "40 min", "1SK6-d7HQNErDcxpnMjImQULp_sdUkNIA"),
    ];

    let modules = days
        .iter()
        .enumerate()
        .map(|(i, (name, description, duration, folder))| {
            let day = i as u32 + 1;
            ContentItem::new(
                &format!("dia-{day}"),
                &format!("DIA {day} – {name}"),
                description,
                ContentKind::Video,
            )
            .with_duration(duration)
            .unlocks_on_day(day - 1)
            .with_content_ref(&drive_folder(folder))
        })
        .collect();

    let bonus = vec![
        ContentItem::new(
            "reprogramacao",
            "Kit de Reprogramação Matinal",
            "PDF + áudio para start diário perfeito",
            ContentKind::Bundle,
        )
        .unlocks_on_day(3)
        .with_content_ref(&drive_folder("1uQJJOng0mLzs9DIvzPHifGzvYsLnmtHL")),
        ContentItem::new(
            "frases-poder",
            "100 Frases de Poder",
            "Visual + PDF para mentalidade blindada",
            ContentKind::Pdf,
        )
        .unlocks_on_day(3)
        .with_content_ref(&drive_folder("1lq2meFGFHa8RYOZyH1uDy3xAGjtpHeg0")),
        ContentItem::new(
            "missoes",
            "7 Missões Secretas",
            "Guerra mental em níveis avançados",
            ContentKind::Bundle,
        )
        .unlocks_on_day(7)
        .with_content_ref(&drive_folder("1Rzl5nPBLA02tVfUc_bhL603J8NsxsUwT")),
        ContentItem::new(
            "audios-blindados",
            "Áudios Blindados de 1 Minuto",
            "Doses concentradas de poder mental",
            ContentKind::Audio,
        )
        .unlocks_on_day(14)
        .with_content_ref(&drive_folder("1ocnKphc_2oFVKXC4Q69I3E5NQYpUmOQt")),
        ContentItem::new(
            "biblioteca-milionaria",
            "Biblioteca Milionária Secreta",
            "100 livros sobre dinheiro que os ricos não querem que você leia",
            ContentKind::Pdf,
        )
        .unlocks_on_day(10)
        .with_content_ref(&drive_folder("1L1xubnLdRleFPIH6xFfYUmN84Uou5Gi3")),
        ContentItem::new(
            "wallpapers-blindados",
            "Wallpapers Blindados",
            "Identidade visual de guerreiro mental",
            ContentKind::Bundle,
        )
        .unlocks_on_day(5)
        .with_content_ref(&drive_folder("1_HVcQykksnD3PmvXBaAiAHcm6itsp3Ul")),
        ContentItem::new(
            "certificado",
            "Certificado Digital",
            "Comprovação da sua transformação",
            ContentKind::Pdf,
        )
        .unlocks_on_day(21)
        .with_content_ref(&drive_folder("1SK6-d7HQNErDcxpnMjImQULp_sdUkNIA")),
    ];

    Product {
        id: "mente-blindada".to_string(),
        name: "Mente Blindada 21".to_string(),
        subtitle: "A Transformação Definitiva".to_string(),
        description: "Uma jornada de 21 dias para destruir versões fracas de si mesmo e \
                      blindar sua mente com aço e propósito."
            .to_string(),
        modules,
        bonus,
    }
}
