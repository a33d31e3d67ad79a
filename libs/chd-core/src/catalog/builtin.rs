//! Built-in congenital heart disease cases.
//!
//! R1 gives a minimal cue; each later rung adds just enough to resolve
//! the remaining uncertainty.

use crate::types::{Case, Category, MediaAsset, NearestDistractor, Stage, StageKind};

fn text(kind: StageKind, content: &str) -> Stage {
    Stage {
        kind,
        content: content.to_string(),
        media: None,
    }
}

fn media(kind: StageKind, content: &str, url: &str, alt: &str, caption: Option<&str>) -> Stage {
    Stage {
        kind,
        content: content.to_string(),
        media: Some(MediaAsset {
            url: url.to_string(),
            alt: Some(alt.to_string()),
            caption: caption.map(str::to_string),
        }),
    }
}

fn distractor(name: &str, why_not: &str) -> NearestDistractor {
    NearestDistractor {
        name: name.to_string(),
        why_not: why_not.to_string(),
    }
}

struct CaseText<'a> {
    id: &'a str,
    name: &'a str,
    category: Category,
    recognition: &'a str,
    hook: &'a str,
    reveal: &'a str,
    aliases: &'a [&'a str],
}

fn case(t: CaseText<'_>, nearest_distractor: NearestDistractor, stages: [Stage; 5]) -> Case {
    Case {
        id: t.id.to_string(),
        name: t.name.to_string(),
        category: t.category,
        recognition: t.recognition.to_string(),
        hook: t.hook.to_string(),
        nearest_distractor,
        stages,
        reveal: t.reveal.to_string(),
        aliases: t.aliases.iter().map(|a| a.to_string()).collect(),
    }
}

pub(super) fn cases() -> Vec<Case> {
    use StageKind::*;

    vec![
        // Acyanotic shunts
        case(
            CaseText {
                id: "asd",
                name: "Atrial Septal Defect (secundum)",
                category: Category::AcyanoticShunt,
                recognition: "Classically a fixed, wide split S2 with a midsystolic ejection flow murmur at the left upper sternal border (LUSB). Large shunts can create a soft mid-diastolic rumble at the lower sternal border from increased tricuspid inflow. CXR may show increased pulmonary vascular markings with right-sided enlargement.",
                hook: "Embryology: Deficiency of the septum secundum.",
                reveal: "Constancy of the split is the giveaway. The flow murmur lives at the LUSB because the increased left-to-right shunt raises flow across the pulmonic valve. The story distinguishes it from physiologic splitting (variable) and from primum defects/AV canal (which implicate endocardial cushions and AV valves).",
                aliases: &["Atrial Septal Defect"],
            },
            distractor(
                "Innocent/physiologic split S2",
                "Physiologic splitting varies with respiration; ASD splitting is fixed regardless of breathing phase.",
            ),
            [
                text(Whisper, "Fixed split S2 in a child."),
                text(Pathophys, "Systolic flow murmur at LUSB; mild exercise intolerance."),
                media(
                    Image,
                    "Prominent pulmonary arteries with increased vascular markings.",
                    "/cases/asd/r3-crop.jpg",
                    "CXR showing prominent pulmonary arteries",
                    Some("Increased pulmonary blood flow dilates the pulmonary arteries"),
                ),
                media(
                    Audio,
                    "Persistently wide, fixed S2 with soft midsystolic flow.",
                    "/cases/asd/r4-audio.mp3",
                    "Heart sound: fixed split S2",
                    None,
                ),
                media(
                    Confirmatory,
                    "Secundum defect confirmed (no AV-valve involvement).",
                    "/cases/asd/r5-full.jpg",
                    "Full CXR with right-sided enlargement",
                    None,
                ),
            ],
        ),
        case(
            CaseText {
                id: "vsd",
                name: "Ventricular Septal Defect",
                category: Category::AcyanoticShunt,
                recognition: "A harsh holosystolic murmur maximal at the LLSB; small VSDs may sound louder and harsher than large ones. Significant shunts create left-sided volume overload and increased pulmonary vascular markings.",
                hook: "Physiology: Loudness does not correlate with size. Small restrictive VSDs can be very loud.",
                reveal: "The holosystolic quality plus LLSB focus clinch VSD. When big, the hemodynamics point to LV volume overload and pulmonary overcirculation. MR is the trap: apex and axilla radiation argue MR, not VSD.",
                aliases: &[],
            },
            distractor(
                "Mitral regurgitation (MR)",
                "MR is also holosystolic, but apical with radiation to the axilla, not parasternal.",
            ),
            [
                text(Whisper, "Harsh holosystolic LLSB."),
                text(Pathophys, "Signs of LV volume load in larger shunts."),
                media(
                    Image,
                    "Pulmonary plethora with left-sided prominence.",
                    "/cases/vsd/r3-crop.jpg",
                    "CXR with pulmonary overcirculation",
                    None,
                ),
                media(
                    Audio,
                    "Pansystolic, no diastolic tail; point of maximal intensity at LLSB.",
                    "/cases/vsd/r4-audio.mp3",
                    "Holosystolic murmur at lower left sternal border",
                    None,
                ),
                text(
                    Confirmatory,
                    "No continuous component; location/radiation stays parasternal.",
                ),
            ],
        ),
        case(
            CaseText {
                id: "pda",
                name: "Patent Ductus Arteriosus",
                category: Category::AcyanoticShunt,
                recognition: "A continuous \"machinery\" murmur at the left infraclavicular area that rises into/just after S2, often with bounding pulses and wide pulse pressure in larger PDAs.",
                hook: "Exposure/association: Congenital rubella; also prematurity.",
                reveal: "The continuous quality plus S2-adjacent peak and infraclavicular site are classic. Bounding pulses reflect diastolic runoff. Unlike holosystolic lesions, PDA spans both systole and diastole.",
                aliases: &[],
            },
            distractor(
                "Arteriovenous malformation (AVM)/venous hum",
                "Continuous too, but site and S2-peaking envelope fit PDA best; AVM/venous hum lacks the crisp S2-adjacent crescendo.",
            ),
            [
                text(Whisper, "Continuous murmur peaking near S2, left infraclavicular."),
                text(Pathophys, "Bounding pulses; wide pulse pressure."),
                media(
                    Image,
                    "Pulmonary plethora with or without left atrial prominence.",
                    "/cases/pda/r3-crop.jpg",
                    "CXR with increased pulmonary markings",
                    None,
                ),
                media(
                    Audio,
                    "Continuous, \"machinery-like,\" intensity highest around S2.",
                    "/cases/pda/r4-audio.mp3",
                    "Continuous machinery murmur",
                    None,
                ),
                text(
                    Confirmatory,
                    "Rubella/prematurity context or full CXR with overcirculation.",
                ),
            ],
        ),
        // Acyanotic obstructive
        case(
            CaseText {
                id: "coa",
                name: "Coarctation of the Aorta",
                category: Category::AcyanoticObstructive,
                recognition: "Upper-extremity > lower-extremity blood pressure, diminished/delayed femoral pulses, and a posterior systolic murmur best between the scapulae. Long-standing disease shows rib notching (3rd to 8th ribs) and a figure-3 sign on CXR.",
                hook: "Physiology: Collaterals through intercostals produce the rib notching.",
                reveal: "The combination of a posterior murmur and a measurable arm-leg gradient is the clinical tell. Rib notching/figure-3 on imaging seals it and distinguishes CoA from AS.",
                aliases: &["Coarctation"],
            },
            distractor(
                "Aortic stenosis (AS)",
                "AS radiates to carotids anteriorly; CoA murmurs often project to the back and create an arm-leg BP gradient.",
            ),
            [
                text(Whisper, "UE > LE BP; weak femoral pulses."),
                text(Pathophys, "Systolic murmur heard interscapular/back."),
                media(
                    Image,
                    "Rib notching (3rd to 8th ribs) from collaterals.",
                    "/cases/coa/r3-crop.jpg",
                    "CXR crop showing rib notching",
                    None,
                ),
                media(
                    Audio,
                    "Systolic whoosh with posterior radiation.",
                    "/cases/coa/r4-audio.mp3",
                    "Systolic murmur, posterior",
                    None,
                ),
                media(
                    Confirmatory,
                    "Full CXR with figure-3 contour (pre/post stenotic dilation).",
                    "/cases/coa/r5-full.jpg",
                    "Figure-3 sign on aortic knob",
                    None,
                ),
            ],
        ),
        case(
            CaseText {
                id: "ps",
                name: "Pulmonic Stenosis (severe)",
                category: Category::AcyanoticObstructive,
                recognition: "Systolic ejection murmur at the LUSB with an ejection click; often a wide split S2 with a soft/delayed P2. Post-stenotic dilation of the main pulmonary artery can appear on CXR in valvar PS.",
                hook: "Physical behavior: Right-sided outflow murmurs may intensify with inspiration (more right-sided flow).",
                reveal: "An ejection click at the LUSB and a split S2 point to isolated PS. TOF is the common trap, but its single S2, cyanosis, and CXR profile separate it.",
                aliases: &["Pulmonic Stenosis", "Pulmonary Stenosis"],
            },
            distractor(
                "Tetralogy of Fallot (TOF)",
                "TOF has single S2, cyanotic spells/squatting, and the classic boot silhouette.",
            ),
            [
                text(Whisper, "LUSB ejection murmur with click."),
                text(Pathophys, "Wide split S2; soft P2."),
                media(
                    Image,
                    "Prominent main PA segment (post-stenotic dilation).",
                    "/cases/ps/r3-crop.jpg",
                    "Dilated main pulmonary artery",
                    None,
                ),
                media(
                    Audio,
                    "Crescendo-decrescendo midsystolic; audible ejection click.",
                    "/cases/ps/r4-audio.mp3",
                    "Systolic ejection murmur with click",
                    None,
                ),
                text(Confirmatory, "No boot silhouette; no single S2."),
            ],
        ),
        // Cyanotic conotruncal
        case(
            CaseText {
                id: "tof",
                name: "Tetralogy of Fallot",
                category: Category::CyanoticConotruncal,
                recognition: "Single S2, harsh LUSB ejection murmur (RVOT), decreased pulmonary vascular markings, and the boot-shaped heart. Toddlers may squat to relieve tet spells (raised SVR reduces the right-to-left shunt).",
                hook: "Embryology/genetics: Conotruncal anomaly; association with 22q11.2 deletion.",
                reveal: "The single S2 and boot silhouette are the anchors. Squatting physiology and oligemic lungs reflect RVOT obstruction with right-to-left shunting, which is why TOF behaves differently from isolated PS.",
                aliases: &["Tetralogy"],
            },
            distractor(
                "Isolated PS",
                "Isolated PS keeps a split S2 and lacks the boot/oligemia/squatting physiology.",
            ),
            [
                text(Whisper, "Single S2; child squats after exertion."),
                text(Pathophys, "Harsh SEM at LUSB; oligemic lungs."),
                media(
                    Image,
                    "Boot-shaped heart with upturned apex.",
                    "/cases/tof/r3-crop.jpg",
                    "Boot silhouette on CXR",
                    None,
                ),
                media(
                    Audio,
                    "Early-peaking ejection; single S2.",
                    "/cases/tof/r4-audio.mp3",
                    "Systolic ejection murmur, single S2",
                    None,
                ),
                text(Confirmatory, "Full CXR; conotruncal association (22q11.2)."),
            ],
        ),
        case(
            CaseText {
                id: "tga",
                name: "d-Transposition of the Great Arteries",
                category: Category::CyanoticConotruncal,
                recognition: "Profound neonatal cyanosis with clear lungs and minimal response to 100% O2 (limited mixing). CXR often shows narrow mediastinum (\"egg-on-a-string\"). Heart sounds may be otherwise unremarkable.",
                hook: "Association: Maternal diabetes is a recognized risk association for outflow anomalies, including TGA.",
                reveal: "Parallel circulations explain the early cyanosis and the poor hyperoxia response. The slender great-vessel pedicle yields the \"egg-on-a-string\" look, different from the snowman of supracardiac TAPVR.",
                aliases: &["d-TGA", "Transposition of the Great Arteries"],
            },
            distractor(
                "TAPVR (supracardiac)",
                "TAPVR classically shows a snowman/figure-8 with widened upper mediastinum and signs of pulmonary overcirculation when unobstructed.",
            ),
            [
                text(Whisper, "Neonate: profound cyanosis, lungs clear."),
                text(Pathophys, "Hyperoxia test: minimal PaO2 rise."),
                media(
                    Image,
                    "Narrow mediastinum (\"egg-on-a-string\").",
                    "/cases/tga/r3-crop.jpg",
                    "Egg-on-a-string silhouette",
                    None,
                ),
                text(Audio, "Normal S1/S2; no pathognomonic murmur."),
                text(Confirmatory, "Full CXR; maternal diabetes risk association."),
            ],
        ),
        case(
            CaseText {
                id: "truncus",
                name: "Truncus Arteriosus",
                category: Category::CyanoticConotruncal,
                recognition: "Single S2 (one semilunar valve), a systolic ejection murmur, early heart failure with pulmonary overcirculation, and often bounding pulses from diastolic runoff. A large VSD is inherent.",
                hook: "Embryology/genetics: Conotruncal defect; association with 22q11.2 deletion.",
                reveal: "The single outflow tract explains the single S2 and early overcirculation. It looks like \"VSD-plus,\" but the physiology (one trunk) produces earlier HF and sometimes bounding pulses from diastolic runoff, which is why it isn't \"just a big VSD.\"",
                aliases: &[],
            },
            distractor(
                "Large VSD",
                "Large VSD lacks a single S2 and typically does not produce bounding pulses/early severe HF to the same degree without the common trunk physiology.",
            ),
            [
                text(Whisper, "Single S2; poor feeding, tachypnea."),
                text(
                    Pathophys,
                    "Early HF with pulmonary plethora; systolic ejection quality.",
                ),
                media(
                    Image,
                    "Cardiomegaly with overcirculation.",
                    "/cases/truncus/r3-crop.jpg",
                    "CXR showing cardiomegaly and plethora",
                    None,
                ),
                media(
                    Audio,
                    "Ejection across a single semilunar valve; no separate P2.",
                    "/cases/truncus/r4-audio.mp3",
                    "Single S2 with ejection murmur",
                    None,
                ),
                text(Confirmatory, "Conotruncal/22q11 association."),
            ],
        ),
        // Cyanotic other
        case(
            CaseText {
                id: "tapvr",
                name: "Total Anomalous Pulmonary Venous Return (supracardiac)",
                category: Category::CyanoticOther,
                recognition: "Variable cyanosis; in the supracardiac, unobstructed form you see increased pulmonary blood flow, a fixed split S2 from right-sided volume load, and on CXR the classic snowman/figure-8 (dilated vertical vein + SVC). Obstruction produces respiratory distress and edema.",
                hook: "Physiology: All pulmonary veins drain to systemic venous circulation, forcing an obligatory shunt across an ASD/PFO.",
                reveal: "The anatomy reroutes pulmonary veins to the systemic venous side, forcing mixing across an atrial level. The snowman silhouette and fixed split S2 with flow murmur separate TAPVR from TGA.",
                aliases: &["Total Anomalous Pulmonary Venous Return"],
            },
            distractor(
                "d-TGA",
                "d-TGA shows narrow mediastinum (egg-on-a-string) and often clear lungs without plethora; the TAPVR snowman widens the upper mediastinum.",
            ),
            [
                text(Whisper, "Cyanosis with tachypnea; loud S2 splitting."),
                text(Pathophys, "Right-sided volume overload clues."),
                media(
                    Image,
                    "Snowman/figure-8 upper mediastinum.",
                    "/cases/tapvr/r3-crop.jpg",
                    "Snowman silhouette on CXR",
                    None,
                ),
                media(
                    Audio,
                    "Fixed split S2; LUSB flow murmur.",
                    "/cases/tapvr/r4-audio.mp3",
                    "Fixed split S2 with flow murmur",
                    None,
                ),
                text(Confirmatory, "Full CXR; obligatory interatrial shunt noted."),
            ],
        ),
        case(
            CaseText {
                id: "avsd",
                name: "Atrioventricular Septal Defect (complete AVSD)",
                category: Category::CyanoticOther,
                recognition: "Failure of endocardial cushion formation creates a common AV valve with a primum ASD and inlet VSD. You hear AV-valve regurgitation (often holosystolic at the LLSB/apex), signs of volume overload, and pulmonary overcirculation on CXR.",
                hook: "Genetics: Strong association with trisomy 21 (Down syndrome).",
                reveal: "The key is both an atrial and ventricular septal component plus AV-valve regurgitation from a common valve. The trisomy 21 context is supportive but not required for recognition.",
                aliases: &[
                    "Atrioventricular Septal Defect",
                    "AV Canal",
                    "Complete AVSD",
                    "Endocardial Cushion Defect",
                ],
            },
            distractor(
                "Primum ASD alone",
                "Primum ASD alone has no inlet VSD and less AV-valve regurgitation; the regurgitant murmur and heavier volume load push toward complete AVSD.",
            ),
            [
                text(Whisper, "Infant with tachypnea, poor weight gain."),
                text(Pathophys, "Holosystolic AV-valve regurgitant murmur."),
                media(
                    Image,
                    "Cardiomegaly with pulmonary plethora.",
                    "/cases/avsd/r3-crop.jpg",
                    "CXR with cardiomegaly and overcirculation",
                    None,
                ),
                media(
                    Audio,
                    "Combined systolic regurgitation rather than isolated flow.",
                    "/cases/avsd/r4-audio.mp3",
                    "Holosystolic regurgitant murmur",
                    None,
                ),
                text(Confirmatory, "Endocardial cushion/Down syndrome context."),
            ],
        ),
        case(
            CaseText {
                id: "ebstein",
                name: "Ebstein Anomaly",
                category: Category::CyanoticOther,
                recognition: "Apical displacement of the tricuspid valve creates \"atrialization\" of the RV, a massive right atrium on imaging, and prominent tricuspid regurgitation: a holosystolic murmur at the LLSB that increases with inspiration (Carvallo). Cyanosis may occur via right-to-left flow at the atrial level.",
                hook: "Exposure/association: Lithium exposure is a classic association.",
                reveal: "The site and inspiratory augmentation shout TR; the striking right-atrial enlargement and atrial-level shunt physiology point to Ebstein, not acquired TR.",
                aliases: &["Ebstein's Anomaly", "Ebstein"],
            },
            distractor(
                "Functional TR from pulmonary hypertension",
                "Functional TR usually lacks the striking RA enlargement and congenital valve displacement.",
            ),
            [
                text(Whisper, "LLSB holosystolic murmur louder with inspiration."),
                text(Pathophys, "Right-sided enlargement; possible cyanosis."),
                media(
                    Image,
                    "Very large right atrial contour (\"boxy\" silhouette).",
                    "/cases/ebstein/r3-crop.jpg",
                    "Massive RA on CXR",
                    None,
                ),
                media(
                    Audio,
                    "TR quality that augments on inspiration.",
                    "/cases/ebstein/r4-audio.mp3",
                    "Holosystolic murmur increasing with inspiration",
                    None,
                ),
                text(
                    Confirmatory,
                    "Congenital (displaced tricuspid) context; lithium association clue.",
                ),
            ],
        ),
        case(
            CaseText {
                id: "hlhs",
                name: "Hypoplastic Left Heart Syndrome",
                category: Category::CyanoticOther,
                recognition: "Gray, shocky neonate as the ductus closes: poor perfusion, weak pulses, acidosis. Heart sounds may be unremarkable or show a single prominent S2 (pulmonic). CXR can show cardiomegaly and pulmonary edema.",
                hook: "Stabilization concept: Prostaglandin E1 to maintain ductal patency while definitive care is arranged.",
                reveal: "The system collapses as systemic flow disappears with ductal closure. Think duct-dependent left-sided outflow obstruction: keep the duct open first; detailed surgical pathways are beyond Step 1 scope.",
                aliases: &[],
            },
            distractor(
                "Severe sepsis",
                "Sepsis may mimic shock, but pre/post-ductal saturation differences and critical dependence on ductal flow favor HLHS.",
            ),
            [
                text(Whisper, "Neonate in shock when duct closes."),
                text(Pathophys, "Weak pulses; differential sats possible."),
                media(
                    Image,
                    "Cardiomegaly with or without pulmonary edema.",
                    "/cases/hlhs/r3-crop.jpg",
                    "CXR with cardiomegaly and edema",
                    None,
                ),
                text(Audio, "Nonspecific; no pathognomonic murmur required."),
                text(Confirmatory, "Duct-dependent physiology; immediate PGE1 concept."),
            ],
        ),
    ]
}
