//! Narrative purchase reasons
//!
//! The generators draw short reason tags. This pass rewrites the `reason` of
//! existing records into a sentence that fits the buyer: candidates are
//! gathered from pools keyed on age decade, household, occupation, financing
//! and timing, and one is picked uniformly. Every other field, including the
//! id, is left as it was.

use crate::id::EntityKind;
use crate::pass::PassSummary;
use crate::record::BuyerRecord;
use crate::sampler::pick_uniform;
use crate::store::ScopeStore;
use crate::vocab::{Family, Method, Timing};
use anyhow::Result;
use rand::Rng;
use tracing::info;

const TWENTIES: &[&str] = &[
    "結婚を機に新居を探していました。駅から近く、近隣に保育園やスーパーもあり、子育てを考えた時に最適な環境だと思い購入を決めました。",
    "初めてのマイホーム購入です。通勤アクセスの良さと周辺環境を重視し、長く住める物件を探していました。",
    "将来の家族計画も考え、広さと立地のバランスが取れた物件を選びました。周辺の生活利便性も魅力的です。",
    "新婚生活のスタートとして、お互いの職場に通いやすい立地を探していました。",
];

const THIRTIES_WITH_CHILDREN: &[&str] = &[
    "子どもの成長に合わせて、教育環境の良いエリアを探していました。近隣に学校や公園も多く、安心して子育てができそうです。",
    "小学校入学前に引っ越したいと考えていました。通学路の安全性と周辺の子育て環境を重視して選びました。",
    "子どもが増えて手狭になったため、もう少し広い住まいを探していました。生活利便性も高く、家族全員が満足しています。",
    "共働きのため、保育園に近く通勤にも便利な立地を最優先に考えていました。",
];

const THIRTIES: &[&str] = &[
    "仕事も落ち着いてきたので、そろそろマイホームをと考えていました。通勤アクセスと価格のバランスが良く、購入を決めました。",
    "賃貸の更新を機に購入を検討しました。立地と広さが希望通りで、資産形成にもなると考えています。",
    "リモートワークが増えたため、仕事部屋を確保できる住まいを探していました。",
    "転勤でこのエリアに来ることになり、通勤アクセスの良さと周辺の生活利便性を重視して選びました。",
];

const FORTIES_WITH_CHILDREN: &[&str] = &[
    "子どもの教育環境を最優先に考え、学校が近く治安の良いエリアを探していました。通勤にも便利で理想的です。",
    "子どもの成長に合わせて、もう少し広い住まいが必要になりました。学校も近く、安心して生活できる環境です。",
    "子どもが複数いるため、それぞれの部屋を確保できる広さを探していました。",
    "子どもの進学を機に、より良い教育環境を求めて住み替えを検討しました。希望する学区内で条件に合う物件が見つかりました。",
];

const FORTIES_COUPLE: &[&str] = &[
    "子育てが一段落し、夫婦二人の生活に適した住まいを探していました。老後も安心です。",
    "老後を見据えて、駅から近く買い物にも便利な立地を重視しました。",
    "賃貸住まいが長かったのですが、資産形成も兼ねて購入を決断しました。立地と価格に納得できました。",
];

const FORTIES: &[&str] = &[
    "職場が近く、通勤時間を短縮したいと考えていました。周辺環境も落ち着いていて理想的です。",
    "将来的な資産価値も考慮し、需要の高いエリアを選びました。生活環境も良好です。",
    "高齢の両親の近くに住みたいと考え、実家から近い物件を探していました。何かあった時にすぐ駆けつけられます。",
];

const FIFTIES: &[&str] = &[
    "定年退職を控え、老後の住まいとして買い物も便利な立地を探していました。長く住める物件だと判断しました。",
    "子どもが独立したため、夫婦二人に適した広さの物件を探していました。",
    "相続した資金を活用し、住み替えを決めました。立地が良く、安心して暮らせそうです。",
    "終の棲家として、安心して暮らせる住まいを選びました。",
];

const SIXTIES_AND_OVER: &[&str] = &[
    "老後の生活を考え、医療施設や商業施設が充実したエリアを探していました。",
    "子どもの近くに住みたいと考え、このエリアを選びました。買い物にも便利で暮らしやすいです。",
    "持ち家を売却し、コンパクトで管理しやすい住まいに住み替えることにしました。",
];

const PUBLIC_SECTOR: &[&str] = &[
    "転勤の少ない職種のため、腰を据えて長く住める物件を探していました。",
    "安定した職業柄、長期的な資産形成を考えて購入を決めました。立地と価格のバランスが良いです。",
];

const BUSINESS_OWNER: &[&str] = &[
    "事業が軌道に乗り、住まいの購入を検討していました。立地と資産価値を重視して選びました。",
    "自宅兼事務所として使える物件を探していました。来客にも便利な立地です。",
];

const MEDICAL_OR_LEGAL: &[&str] = &[
    "勤務先に近く、緊急時にもすぐ対応できる距離を重視しました。生活環境も静かで理想的です。",
    "職場への通勤時間を短縮したいと考えていました。周辺の教育環境も充実しています。",
];

const CASH: &[&str] = &[
    "相続した資金を有効活用したいと考え、立地と資産価値を重視して選びました。",
    "現金購入で資産を保有したいと考えていました。条件が良く、安心して購入できました。",
];

const IMMEDIATE: &[&str] = &[
    "急な転勤が決まり、早急に住まいを探していました。条件に合う物件が見つかり、すぐに決断しました。",
    "賃貸の契約満了が迫っており、すぐに入居できる物件を探していました。",
];

const SINGLE: &[&str] = &[
    "独立を機に住まいを購入したいと考えていました。",
    "賃貸より資産になる方が良いと考え、購入を決めました。立地と価格のバランスが良いです。",
    "転職を機に引っ越すことになり、職場に近い物件を探していました。",
];

const GENERIC: &[&str] = &[
    "住み替えを検討していた時に、希望の条件に合う物件が見つかりました。立地と価格に納得できました。",
    "長年住んでいたエリアですが、より良い住環境を求めて住み替えを決めました。",
    "家族の意見が一致し、みんなが納得できる物件を見つけることができました。",
    "価格と立地のバランスが良く、資産価値も期待できると判断しました。",
    "周辺の生活利便性が高く、日々の暮らしがしやすいと思い購入を決めました。",
    "近隣に必要な施設が揃っており、快適に暮らせる環境だと判断しました。",
];

/// Every narrative that fits the buyer. Never empty.
pub fn candidates(record: &BuyerRecord) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = Vec::new();
    let family = record.family;

    match record.age_decade() {
        20 => pool.extend(TWENTIES),
        30 if family.has_children() => pool.extend(THIRTIES_WITH_CHILDREN),
        30 => pool.extend(THIRTIES),
        40 if family.has_children() => pool.extend(FORTIES_WITH_CHILDREN),
        40 if family == Family::Couple => pool.extend(FORTIES_COUPLE),
        40 => pool.extend(FORTIES),
        50 => pool.extend(FIFTIES),
        d if d >= 60 => pool.extend(SIXTIES_AND_OVER),
        _ => {}
    }

    let occupation = record.occupation.as_str();
    if occupation.contains("公務員") || occupation.contains("教員") {
        pool.extend(PUBLIC_SECTOR);
    }
    if occupation.contains("自営業") || occupation.contains("経営") {
        pool.extend(BUSINESS_OWNER);
    }
    if occupation.contains("医師") || occupation.contains("弁護士") {
        pool.extend(MEDICAL_OR_LEGAL);
    }
    if record.method == Method::Cash {
        pool.extend(CASH);
    }
    if record.timing == Timing::Immediate {
        pool.extend(IMMEDIATE);
    }
    if family == Family::Single {
        pool.extend(SINGLE);
    }

    pool.extend(GENERIC);
    pool
}

pub fn refine_reason(record: &mut BuyerRecord, rng: &mut impl Rng) {
    let pool = candidates(record);
    if let Some(reason) = pick_uniform(&pool, rng) {
        record.reason = reason.to_string();
    }
}

/// Rewrite reasons in every scope file of `kind`
pub fn refine_scope_files(store: &ScopeStore, kind: EntityKind, rng: &mut impl Rng) -> Result<PassSummary> {
    let files = store.scope_files(kind)?;
    info!("Found {} {} files to refine", files.len(), kind);

    let mut summary = PassSummary::default();
    for path in &files {
        let mut records = match store.read_records(path) {
            Ok(records) => records,
            Err(err) => {
                summary.fail(path, err);
                continue;
            }
        };
        for record in records.iter_mut() {
            refine_reason(record, rng);
        }
        if let Err(err) = store.write_records(path, &records) {
            summary.fail(path, err);
            continue;
        }
        summary.processed(&records);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::BuyerId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn buyer(age: u8, family: Family, occupation: &str) -> BuyerRecord {
        BuyerRecord {
            id: BuyerId::new(EntityKind::House, 3),
            family,
            age,
            occupation: occupation.to_string(),
            timing: Timing::WithinSixMonths,
            method: Method::Mortgage,
            reason: "通勤の利便性".to_string(),
            ng: "特になし".to_string(),
            purpose: None,
            building_age: None,
            layout: None,
            land_area: None,
            walking_distance: None,
        }
    }

    #[test]
    fn test_candidates_follow_attributes() {
        let parent = buyer(34, Family::CoupleOneChild, "会社員（一般）");
        let pool = candidates(&parent);
        assert!(pool.contains(&THIRTIES_WITH_CHILDREN[0]));
        assert!(!pool.contains(&THIRTIES[0]));
        assert!(!pool.contains(&SINGLE[0]));

        let mut official = buyer(45, Family::Couple, "公務員（地方公務員）");
        official.method = Method::Cash;
        official.timing = Timing::Immediate;
        let pool = candidates(&official);
        for expected in [FORTIES_COUPLE[0], PUBLIC_SECTOR[0], CASH[0], IMMEDIATE[0], GENERIC[0]] {
            assert!(pool.contains(&expected));
        }

        let retired = buyer(67, Family::Single, "無職");
        let pool = candidates(&retired);
        assert!(pool.contains(&SIXTIES_AND_OVER[0]));
        assert!(pool.contains(&SINGLE[0]));
    }

    #[test]
    fn test_refine_only_touches_reason() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = buyer(52, Family::CoupleTwoChildren, "医師");
        let mut refined = original.clone();
        refine_reason(&mut refined, &mut rng);

        assert_ne!(refined.reason, original.reason);
        assert!(candidates(&original).contains(&refined.reason.as_str()));
        refined.reason = original.reason.clone();
        assert_eq!(refined, original);
    }
}
