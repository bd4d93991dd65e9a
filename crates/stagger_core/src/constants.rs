//! High-precision constants.
//!
//! Each table stores an enclosure at precision 20: nineteen point limbs
//! followed by the bounds of the tail interval, as IEEE-754 bit patterns.
//! A table is decoded once, on first use, into its enclosures at every
//! precision up to [`MAX_CONSTANT_PREC`]; accessors hand out the one for the
//! current working precision.

use std::sync::OnceLock;

use crate::interval::Interval;
use crate::l_interval::LInterval;
use crate::precision::{stagprec, MAX_CONSTANT_PREC};

type Table = [u64; 21];

/// Enclosures of one table at precisions `1..=MAX_CONSTANT_PREC`.
type Levels = OnceLock<Vec<LInterval>>;

fn decode(table: &Table) -> LInterval {
    let limbs = table[..19].iter().map(|&b| f64::from_bits(b)).collect();
    let tail = Interval::unchecked(f64::from_bits(table[19]), f64::from_bits(table[20]));
    LInterval::from_parts(limbs, tail)
}

fn cached(levels: &'static Levels, table: &Table) -> LInterval {
    let levels = levels.get_or_init(|| {
        let full = decode(table);
        (1..=MAX_CONSTANT_PREC).map(|p| full.adjusted(p)).collect()
    });
    let prec = stagprec();
    match levels.get(prec - 1) {
        Some(x) => x.clone(),
        None => decode(table).adjusted(prec),
    }
}

const LN2: Table = [
    0x3FE62E42FEFA39EF,
    0x3C7ABC9E3B39803F,
    0x3907B57A079A1934,
    0xB5AACE93A4EBE5D1,
    0xB2423A2A82EA0C24,
    0x2EDD881B7AEB2615,
    0x2B79552FB4AFA1B1,
    0x27EDA5D5C6B82704,
    0x2474427573B29117,
    0xA1191F6B05A4D7A7,
    0x9DBDB5173AE53426,
    0x1A31317C387EB9EB,
    0x96D90F13B267F137,
    0x1376FA0EC7657F75,
    0x901234C5E1398A6B,
    0x0CA195EBBF4D7A70,
    0x0948192432AFD0C4,
    0x85EA1BE38BA4BA4D,
    0x824D7860151CFC06,
    0x000000032847ED6F,
    0x000000032847ED70,
];

const LN10: Table = [
    0x40026BB1BBB55516,
    0xBCAF48AD494EA3E9,
    0xB949EBAE3AE0260C,
    0xB5E2D10378BE1CF1,
    0x3280403E05AE52C6,
    0xAF0FA509CAFDF466,
    0xABAC79A1FE9D0795,
    0x284058C448308218,
    0xA4DD250470877BFD,
    0xA15AE92987D3075D,
    0x9DFD5CDBB8626956,
    0x9A93C4F27CE0410A,
    0x173B3AC12ACF1BE9,
    0x13D161BB49D219C8,
    0x90710D6613293728,
    0x0CF42163A4CDA351,
    0x097E2713D6C22C16,
    0x85E5090EF85CB0AD,
    0x827C5B3E859F876E,
    0x8000000703552C52,
    0x8000000703552C51,
];

const LN10R: Table = [
    0x3FDBCB7B1526E50E,
    0x3C695355BAAAFAD3,
    0x38FEE191F71A3012,
    0x3587268808E8FCB5,
    0x3203DE3A94F1D509,
    0x2E9DF42805E7E524,
    0x2B31AAC96323250B,
    0xA7DCE63884C058E4,
    0xA47A1C82EA3969BA,
    0x211B4F6686AD7A33,
    0x9DBB97C8035FFC70,
    0x1A0630771369962E,
    0x96AE15BD37B295AF,
    0x93432484B432318B,
    0x0FE5430212AE68C0,
    0x0C8351923B322731,
    0x0921F934D794D64F,
    0x05B3E4B475D9FF20,
    0x02585D9B63ED9A24,
    0x000000035B8CA18C,
    0x000000035B8CA18D,
];

const PID4: Table = [
    0x3FE921FB54442D18,
    0x3C81A62633145C06,
    0x393C1CD129024E08,
    0x35E14CF98E804178,
    0xB2759C4EC64DDAEC,
    0x2F2410F31C6809BC,
    0xABB06AE64C32C5BC,
    0xA86C99FA9EB241B4,
    0xA4ED791603D95252,
    0xA18571EDD0DBD254,
    0x9E233B4302721768,
    0x1AD0BA698DFB5AC2,
    0x178FFAE5B7A035C0,
    0x943211C79404A576,
    0x90D816945836FBA0,
    0x8D8DA700CDB6BCCE,
    0x0A31ECE45B3DC200,
    0x06DF2E2858EFC166,
    0x036B4906C38ABA73,
    0x0009A458FEA3F493,
    0x0009A458FEA3F494,
];

const SQRT2: Table = [
    0x3FF6A09E667F3BCD,
    0xBC9BDD3413B26456,
    0x39357D3E3ADEC175,
    0x35B2775099DA2F59,
    0x32260CCE64552BF2,
    0x2E9821D5C5161D46,
    0xAB3C032046F8498E,
    0x27BEE950BC8738F7,
    0xA45AC3FDBC64E103,
    0x20D3B469101743A1,
    0x1D75E3E9CA60B38C,
    0x19C1BC337BCAB1BD,
    0x966BBA5DEE9D6E7D,
    0x930438DD083B1CC4,
    0x0FAB56A28E2EDFA7,
    0x0C4CCB2A634331F4,
    0x88DBD9056876F83E,
    0x857234FA22AB6BEF,
    0x0209040CA4A81395,
    0x800000002A493818,
    0x800000002A493817,
];

const SQRT5: Table = [
    0x4001E3779B97F4A8,
    0xBC9F506319FCFD19,
    0x393B906821044ED8,
    0xB5B8BB1B5C0F272C,
    0x3241D0C18E952768,
    0xAEBE9D585B0901F9,
    0xAB5C7DD252073EC0,
    0xA7FFCEF21EDAF7FA,
    0x24160EB25D20799B,
    0xA08C90F95285168F,
    0x1D2E1DFA160E75BC,
    0x9960A08E66CB368C,
    0x160C5371682CADD1,
    0x929998100220F4ED,
    0x0F3C6771A0968663,
    0x0BDDFB9E3C86CA7C,
    0x8868AE38ED5304B1,
    0x05082A5FEC507706,
    0x818B5191A18C5647,
    0x00000000000F9D52,
    0x00000000000F9D53,
];

const SQRT7: Table = [
    0x40052A7FA9D2F8EA,
    0xBCA21C62B033C079,
    0xB9177CAAD6200612,
    0xB59EFA880DC72D64,
    0xB1F71D206D5B1A4C,
    0x2E619392FA9B0494,
    0x2AD7BB8A64890057,
    0xA777E89300383DDE,
    0x24130FB7AF68A6FB,
    0x209322281D303D36,
    0x1D3996109A16D3B1,
    0x19CF239C301DFBB4,
    0x963B5CA40AB771A2,
    0x92A675711487FEAA,
    0x0F422CB7FA26ABA5,
    0x0BD059211B7D5398,
    0x8870F15BFA46EB7F,
    0x0515AB71566CE72B,
    0x81A386BDCA3845C7,
    0x0000000000AC4BC7,
    0x0000000000AC4BC8,
];

const LN2R: Table = [
    0x3FF71547652B82FE,
    0x3C7777D0FFDA0D24,
    0xB9160BB8A5442AB9,
    0xB594B52D3BA6D74D,
    0x3239A342648FBC39,
    0xAEDE0455744994EE,
    0x2B7B25EEB82D7C16,
    0x281F5485CF306255,
    0xA4BEC07680A1F958,
    0xA1506326680EB5B6,
    0x9DFB3D04C549BC98,
    0x1A9EABCEAD10305B,
    0x9704440C57D7AB97,
    0x9397185D42A4E6D6,
    0x901F332B5BE48526,
    0x0CB2CE4F199E108D,
    0x8928DAFCC6077F2A,
    0x05B9ABB71EC25E12,
    0x8221473D7A3366BD,
    0x800000004977D38B,
    0x800000004977D38A,
];

const PI: Table = [
    0x400921FB54442D18,
    0x3CA1A62633145C07,
    0xB92F1976B7ED8FBC,
    0x35C4CF98E804177D,
    0x32631D89CD9128A5,
    0x2EC0F31C6809BBDF,
    0x2B5519B3CD3A431B,
    0x27E8158536F92F8A,
    0x246BA7F09AB6B6A9,
    0xA0EEDD0DBD2544CF,
    0x1D779FB1BD1310BA,
    0x1A1A637ED6B0BFF6,
    0x96AA485FCA40908E,
    0x933E501295D98169,
    0x8FD160DBEE83B4E0,
    0x8C59B6D799AE131C,
    0x08F6CF70801F2E28,
    0x05963BF0598DA483,
    0x023871574E69A459,
    0x8000000005702DB4,
    0x8000000005702DB3,
];

const PID2: Table = [
    0x3FF921FB54442D18,
    0x3C91A62633145C07,
    0xB91F1976B7ED8FBC,
    0x35B4CF98E804177D,
    0x32531D89CD9128A5,
    0x2EB0F31C6809BBDF,
    0x2B4519B3CD3A431B,
    0x27D8158536F92F8A,
    0x245BA7F09AB6B6A9,
    0xA0DEDD0DBD2544CF,
    0x1D679FB1BD1310BA,
    0x1A0A637ED6B0BFF6,
    0x969A485FCA40908E,
    0x932E501295D98169,
    0x8FC160DBEE83B4E0,
    0x8C49B6D799AE131C,
    0x08E6CF70801F2E28,
    0x05863BF0598DA483,
    0x022871574E69A459,
    0x8000000002B816DA,
    0x8000000002B816D0,
];

const PI2: Table = [
    0x401921FB54442D18,
    0x3CB1A62633145C07,
    0xB93F1976B7ED8FBC,
    0x35D4CF98E804177D,
    0x32731D89CD9128A5,
    0x2ED0F31C6809BBDF,
    0x2B6519B3CD3A431B,
    0x27F8158536F92F8A,
    0x247BA7F09AB6B6A9,
    0xA0FEDD0DBD2544CF,
    0x1D879FB1BD1310BA,
    0x1A2A637ED6B0BFF6,
    0x96BA485FCA40908E,
    0x934E501295D98169,
    0x8FE160DBEE83B4E0,
    0x8C69B6D799AE131C,
    0x0906CF70801F2E28,
    0x05A63BF0598DA483,
    0x024871574E69A459,
    0x800000000AE05B67,
    0x800000000AE05B66,
];

const PID3: Table = [
    0x3FF0C152382D7366,
    0xBC9EE6913347C2A6,
    0xB914BBA47A9E5FD2,
    0xB5BCCAEF65529B02,
    0x32497CB7BCC18B87,
    0xAEE3EBBDA1FF3058,
    0xAB61D10CB320F4D1,
    0x27F958EB892987EC,
    0x24967C54B11CF247,
    0x2102C2E985923A44,
    0x1D8945484A2DD81F,
    0x1A0197A9E475D54F,
    0x96AE181FEE158585,
    0x134047FCE7066A6E,
    0x0FED1A8602EA0C85,
    0x0C84430C5998BF34,
    0x09173BF40AAD43D9,
    0x85B37B014DDEDCF5,
    0x822A5F1B210EE7C5,
    0x00000000A8DA9B6E,
    0x00000000A8DA9B6F,
];

const PIR: Table = [
    0x3FD45F306DC9C883,
    0xBC76B01EC5417056,
    0xB916447E493AD4CE,
    0x35BE21C820FF28B2,
    0xB24508510EA79237,
    0x2ECB8E909374B802,
    0xAB6B6D115F62E6DE,
    0xA7F80F10A71A76B3,
    0x248CFBA208D7D4BB,
    0xA102EDEC598E3F65,
    0x9D9741037D8CDC54,
    0x1A3CC1A99CFA4E42,
    0x16C7E2EF7E4A0EC8,
    0x930DA00087E99FC0,
    0x8FA0D0EE74A5F593,
    0x0C2F6D367ECF27CB,
    0x08936E9E8C7ECD3D,
    0x85300AE9456C229C,
    0x81A41A0E84C2F8C6,
    0x800000000010EB5B,
    0x800000000010EB5A,
];

const PI2R: Table = [
    0x3FC45F306DC9C883,
    0xBC66B01EC5417056,
    0xB906447E493AD4CE,
    0x35AE21C820FF28B2,
    0xB23508510EA79237,
    0x2EBB8E909374B802,
    0xAB5B6D115F62E6DE,
    0xA7E80F10A71A76B3,
    0x247CFBA208D7D4BB,
    0xA0F2EDEC598E3F65,
    0x9D8741037D8CDC54,
    0x1A2CC1A99CFA4E42,
    0x16B7E2EF7E4A0EC8,
    0x92FDA00087E99FC0,
    0x8F90D0EE74A5F593,
    0x0C1F6D367ECF27CB,
    0x08836E9E8C7ECD3D,
    0x85200AE9456C229C,
    0x81941A0E84C2F8C6,
    0x80000000000875AE,
    0x80000000000875AD,
];

const SQRT_PI: Table = [
    0x3FFC5BF891B4EF6B,
    0xBC9618F13EB7CA89,
    0xB91B1F0071B7AAE4,
    0xB5A389B5A46BDFE8,
    0xB2460AF5C5C89448,
    0xAE84835F07122994,
    0x2B2CEC283C18EE8F,
    0xA7B3ADEBB9223CA8,
    0x245454912430D291,
    0xA0FE8B2345020EF6,
    0x9D87262982556291,
    0x1A1196FA9B140CAB,
    0x96B75EEE59D91D39,
    0x130789268B7D9D48,
    0x0FA7162E2F06B89C,
    0x0C3EC9C08F40A3DB,
    0x08DB6048DD0729E2,
    0x056471CF4C33FF6B,
    0x020D75FBD8B36F94,
    0x000000002D74B3A2,
    0x000000002D74B3A3,
];

const SQRT_2PI: Table = [
    0x40040D931FF62706,
    0xBCAA6A0D6F814637,
    0xB94311D073060ACE,
    0x35B6000B50DC2F41,
    0x3246EF75CA45A834,
    0x2EC9BDB2B4C39342,
    0x2B5F5582E2063EE6,
    0x27C83F879BEA150C,
    0xA44F1EA3CA289B00,
    0xA0D699CDA77736F9,
    0x9D41A379D298B55E,
    0x99EA6DDB0152BA94,
    0x967957E2E58A02FE,
    0x931D6160F18E604D,
    0x0F8311860CDF7215,
    0x0C12271F44C50274,
    0x88A00BF5C5497A21,
    0x052E94B6E6AD51E2,
    0x819C910B5F3D27CE,
    0x00000000007C99B0,
    0x00000000007C99B1,
];

const SQRT_PIR: Table = [
    0x3FE20DD750429B6D,
    0x3C61AE3A914FED80,
    0xB8F3CBBEBF65F145,
    0xB58E0C574632F53E,
    0xB22E6633BE9E7F15,
    0x2EBCF859270F1141,
    0xAB4FE4FB499C328A,
    0xA7D0B82C446DC78D,
    0xA47878B089078800,
    0xA0F3DAEADA9E233E,
    0x1D9137197A708BD2,
    0x99E09009506D5BA2,
    0x1687C9F0B5951E94,
    0x931735F4949633A4,
    0x8FB46014DBC90D0E,
    0x0C5CAB0B222EEEA0,
    0x08FB1C750754B40A,
    0x8576B2CD2E72C16E,
    0x82148C024FF194B2,
    0x0000000073E19B74,
    0x0000000073E19B75,
];

const SQRT_2PIR: Table = [
    0x3FD9884533D43651,
    0xBC7CBC0D30EBFD15,
    0xB8FC7402C7D60CFB,
    0x3572706D8C0471B5,
    0xB21FF6718B45881D,
    0xAEB3AABB82C248DC,
    0xAB2458A899162EE4,
    0xA7B4EBD8868F41EB,
    0x2433278E993445F1,
    0xA0DCC019F5F4780A,
    0x1D747CE4B4ECDBD7,
    0x99F9A3DCC6A3534B,
    0x1691379A7BA8CB0A,
    0x9322D909C875312E,
    0x0FBC1CEC4882C77B,
    0x8C54C4078263DF36,
    0x08FAB3FC8D2AB243,
    0x0597B9172454310A,
    0x823444B6B781B7F2,
    0x80000001DB5C6774,
    0x80000001DB5C6773,
];

const PIP2: Table = [
    0x4023BD3CC9BE45DE,
    0x3CC692B71366CC04,
    0x3968358E10ACD480,
    0xB5FF2F5DD7997DDF,
    0x32429E39B47B884E,
    0xAEE2CF7459DD5DAF,
    0xAB81842F87B5FE0F,
    0x282FFD8A79616A21,
    0x24C2492A6663E899,
    0xA15A15F4352CC511,
    0x9DE301AA1792FF3C,
    0x1A822B6F31626EFE,
    0x172B317FA13BDD8F,
    0x13C6F83B49040075,
    0x906B1890A945FE17,
    0x0D02DCD389B96CDB,
    0x897743F5DDE2F157,
    0x86053F96FFD4AEB5,
    0x0283CD6F5847D569,
    0x0000001471E79A7B,
    0x0000001471E79A8B,
];

const SQRT2R: Table = [
    0x3FE6A09E667F3BCD,
    0xBC8BDD3413B26456,
    0x39257D3E3ADEC175,
    0x35A2775099DA2F59,
    0x32160CCE64552BF2,
    0x2E8821D5C5161D46,
    0xAB2C032046F8498E,
    0x27AEE950BC8738F7,
    0xA44AC3FDBC64E103,
    0x20C3B469101743A1,
    0x1D65E3E9CA60B38C,
    0x19B1BC337BCAB1BD,
    0x965BBA5DEE9D6E7D,
    0x92F438DD083B1CC4,
    0x0F9B56A28E2EDFA7,
    0x0C3CCB2A634331F4,
    0x88CBD9056876F83E,
    0x856234FA22AB6BEF,
    0x01F9040CA4A81395,
    0x8000000015249C0C,
    0x8000000015249C0B,
];

const SQRT3: Table = [
    0x3FFBB67AE8584CAA,
    0x3C9CEC95D0B5C1E3,
    0xB91F11DB689F2CCF,
    0x35B3DA4798C720A6,
    0x32521B9169B89243,
    0xAEC813508751212B,
    0xAB5B3D547B775C1E,
    0xA7C9D986D92E2F0A,
    0x245A34334CE806B6,
    0x20FA383B9E122E61,
    0x1D8C61D736F2F6F2,
    0x9A10AF49233F9250,
    0x96A558A109EC0523,
    0x134F799D4D4FF2BC,
    0x8FEAD7B219E34EDB,
    0x0C85AB940B6677E3,
    0x891D9B2A8203B8F0,
    0x85BDB0C8975A3834,
    0x825BCAAB3F6BE884,
    0x00000000531C2B6C,
    0x00000000531C2B6D,
];

const SQRT3D2: Table = [
    0x3FEBB67AE8584CAA,
    0x3C8CEC95D0B5C1E3,
    0xB90F11DB689F2CCF,
    0x35A3DA4798C720A6,
    0x32421B9169B89243,
    0xAEB813508751212B,
    0xAB4B3D547B775C1E,
    0xA7B9D986D92E2F0A,
    0x244A34334CE806B6,
    0x20EA383B9E122E61,
    0x1D7C61D736F2F6F2,
    0x9A00AF49233F9250,
    0x969558A109EC0523,
    0x133F799D4D4FF2BC,
    0x8FDAD7B219E34EDB,
    0x0C75AB940B6677E3,
    0x890D9B2A8203B8F0,
    0x85ADB0C8975A3834,
    0x824BCAAB3F6BE884,
    0x00000000298E15B6,
    0x00000000298E15B7,
];

const SQRT3R: Table = [
    0x3FE279A74590331C,
    0x3C834863E0792BED,
    0xB92A82F9E6C53222,
    0xB5CCB0F41134253A,
    0x326859ED919EC30B,
    0x2EF454874FB1F3F4,
    0xAB9DE69C6D3D2741,
    0x2837EEC450C48BE1,
    0xA4D6F743EEE65D53,
    0xA15887B505D7E7C2,
    0x9DE484D2E10C1161,
    0x9A8A0B1F86177FB7,
    0x170FE389D3F2C54E,
    0x13AF29F77C671544,
    0x9046CE74ED77D9BE,
    0x8CEE38708FF0CCB5,
    0x898F13BCC70157D1,
    0x0627EC34CF9B1930,
    0x82B17A638EFF3A8B,
    0x8000016A8EF69C32,
    0x8000016A8EF69C31,
];

const LN_PI: Table = [
    0x3FF250D048E7A1BD,
    0x3C67ABF2AD8D5088,
    0xB8E6CCF43244818A,
    0x358F9303719C0176,
    0x3225DF52611CB54E,
    0xAECD9056E74F8C97,
    0x2B500B095B6C2E1A,
    0xA7F8C7557878A9E7,
    0x248B9BBBB4F4CEE7,
    0x212B477FCC702F86,
    0x1DC41F1344A31799,
    0x1A6B6740BE95CD58,
    0x96EF2C63904D27DB,
    0x136426F00B933976,
    0x10025703BE5FAA20,
    0x8C9DADAE5397F95B,
    0x0917C9D110381543,
    0x85B259230E627FCA,
    0x02491CEAB6B13A33,
    0x0000000109D49A13,
    0x0000000109D49A15,
];

const LN_2PI: Table = [
    0x3FFD67F1C864BEB5,
    0xBC965B5A1B7FF5DF,
    0xB92B7F70C13DC1CC,
    0x35C3458B4DDEC6A3,
    0x32433DAA155D2130,
    0xAEE8A007FC5E501B,
    0xAB45406FA3AA9644,
    0xA7E3E8D52A392CC9,
    0xA48A43099131E88D,
    0xA1214835B6623C4D,
    0x9DCABB7858CF827A,
    0x1A6D8D7045A5A495,
    0x16FA26094B3F6FC5,
    0x937EF27932D0E3D0,
    0x9002128804136AB6,
    0x0C75F8A4AC0BEE17,
    0x091892F2A5B69B5F,
    0x05BCC7C09477ADCE,
    0x82216DD579AF074A,
    0x00000000321C8783,
    0x00000000321C8784,
];

const E: Table = [
    0x4005BF0A8B145769,
    0x3CA4D57EE2B1013A,
    0xB92618713A31D3E2,
    0x35CC5A6D2B53C26D,
    0xB26F75CDE60219B6,
    0xAEF88C76D93041A1,
    0x2B92FE363630C75E,
    0xA83C25F937F544EE,
    0xA4DE852C20E12A2A,
    0xA124D4F6DE605705,
    0x9D8F3225EF539355,
    0x9A26109728625547,
    0x96C94301506D94CF,
    0x936879C78F8CBA44,
    0x8FDD5976250C1018,
    0x0C7C877C56284DAB,
    0x091E73530ACCA4F5,
    0x85BF161A150FD53A,
    0x02259927DB0E8845,
    0x0000000094BB2C8E,
    0x0000000094BB2C8F,
];

const ER: Table = [
    0x3FD78B56362CEF38,
    0xBC6CA8A4270FADF5,
    0xB90837912B3FD2AA,
    0xB5A52711999FB68C,
    0xB247AD7C1289274E,
    0x2E67E8E56842B705,
    0xAB0D24CB13796C2D,
    0xA79456AABDA5C8F2,
    0x243229F03C6276DD,
    0xA0D569CFC4F53109,
    0x9D555B63C9B68091,
    0x19F580CF14DC087C,
    0x168F9FF222313669,
    0x1325BC9CB1A22487,
    0x8FB857E415C89B13,
    0x0C53DF75706E3643,
    0x08D3BDF5B7646234,
    0x057C956A5A3BE55D,
    0x82067243FE9CD95E,
    0x000000002F30CCDB,
    0x000000002F30CCDC,
];

const EP2: Table = [
    0x401D8E64B8D4DDAE,
    0xBCA9E62E22EFCA4C,
    0x394577508F5CF5ED,
    0xB5E86EF0294C2511,
    0x32777D109F148782,
    0x2F066BBC354AB700,
    0xABA273AEC0115969,
    0xA84C5AE00D3BEEF1,
    0x24C5ACA3FDC9595F,
    0xA1513FCDFE2B1F0C,
    0x1DF0EEDFD1AE90C9,
    0x1A9D2CB8EDC7078B,
    0x1731827A19F175F8,
    0x93C0267512A9BFB2,
    0x9059A1E2FC413AE3,
    0x0CF170C7A5981ADB,
    0x899FC991480067CF,
    0x8622E9A54CF5CFB5,
    0x82A66FA6C468910A,
    0x00000043EA6DC142,
    0x00000043EA6DC143,
];

const EP2R: Table = [
    0x3FC152AAA3BF81CC,
    0xBC6809224547B4BF,
    0xB906A8E079134F13,
    0x3584564CACF0994E,
    0x322B796438129AF8,
    0xAECACFED57EF2AE5,
    0xAB5A968CBDBB5D9D,
    0x27CA7238CBD97B71,
    0xA4546C53DB77BB01,
    0xA0CEEC161C3EBBD7,
    0x9D52D084DC157ACE,
    0x19F2A61F46883347,
    0x164993BAF10CAE0B,
    0x12EF9224351178FF,
    0x8F7C366D1C7BA64A,
    0x8C07D9938EFA4657,
    0x08AB6668DF0C1286,
    0x050F7A4FFC9B48C6,
    0x01AF3E3AF6F17591,
    0x00000000006C7831,
    0x00000000006C7832,
];

const EP_PI: Table = [
    0x403724046EB0933A,
    0xBCD84C962DD81952,
    0xB962D659C0BCD22E,
    0x36017496B8A92F91,
    0x32A6A8C4203E5FCD,
    0xAF466B11F99A663B,
    0xABE18EC2076DABB1,
    0x2889776E5BEB18A5,
    0x252AD4091E84B051,
    0x21CE89AA12909B40,
    0x1E3ACE3C0DDBB994,
    0x1AC41EC9379CBBFE,
    0x173FC4E78D00A016,
    0x13D608BE35B9A409,
    0x903A0D8AA90EB6B9,
    0x0CD06FE8AFD21ACF,
    0x095C072FEA1BFCAF,
    0x05B915B9F352EC68,
    0x8243FA07C37897E9,
    0x80000003D8039138,
    0x80000003D8039137,
];

const EP_2PI: Table = [
    0x4080BBEEE9177E19,
    0x3D0C7DD9272526B1,
    0x39A5200F57AB89ED,
    0xB63FCCB6EDBE9C36,
    0x32DBEA0BF179A589,
    0xAF7F3AD5A6B77F9E,
    0xAC0622F702B57637,
    0xA8700C09AE818734,
    0x24D0DA7ADA79EFE6,
    0x216FF9BF48B72959,
    0x9E07AD7A3F6D2A14,
    0x1A9FCD4B0FA971E4,
    0x17293A2CDC04526B,
    0x93C8CBE5FDFAF25F,
    0x105D47EEE171DA93,
    0x8CF5B0F8DA29DB32,
    0x8979207AD7E637D8,
    0x06191CA743F265A6,
    0x02AA15069182EF28,
    0x800000EAC5FC05A9,
    0x800000EAC5FC05A8,
];

const EP_PID2: Table = [
    0x40133DEDC855935F,
    0x3CB3E45A768FB73C,
    0xB95FB31CF300FF3C,
    0xB5FE80D8BEB83F79,
    0xB264A3DE039142DD,
    0xAEB8792D7A37282B,
    0xAB59DF43A5980C28,
    0xA7FC6F0F641C0D67,
    0xA49779C86C2DB5AC,
    0x21168521EE91B16F,
    0x1DB2530F905D97BD,
    0x1A53498112CB7585,
    0x16FBA4546B13A434,
    0x1384FF791C56421C,
    0x902F375C223A2152,
    0x8CC26AB0C8C77412,
    0x894B39C9C0B8C54A,
    0x85D67741414E31E3,
    0x025DEFB4462546C1,
    0x800000010F7B89CD,
    0x800000010F7B89CC,
];

const EP_PID4: Table = [
    0x40018BD669471CAA,
    0x3CAF0ED609715756,
    0xB94B9C7B871FE1DB,
    0x35D5C0FECE98F209,
    0x3278C9FACC5DF3CE,
    0x2EF5EDE838B4A399,
    0xAB9C7EFACA363051,
    0xA83A1EBEA1646411,
    0x24CAEF54E68CE03B,
    0xA121250CB97FDDBF,
    0x9DB69ADC0E65B8A7,
    0x1A598A501DB90EDD,
    0x96E586909A3F6365,
    0x138BE542410F8CE7,
    0x102E7EEC51889EEC,
    0x8CC913C9FC19333C,
    0x095112C71EA1E6F0,
    0x85EC4CCF0F5D1E14,
    0x028AC4A72310FA27,
    0x80000013EC6A07AE,
    0x80000013EC6A07AD,
];

const EULER_GAMMA: Table = [
    0x3FE2788CFC6FB619,
    0xBC56CB90701FBFAB,
    0xB8F34A95E3133C51,
    0x3599730064300F7D,
    0xB2271ECA0084E369,
    0xAEC302FE2B078898,
    0x2B592732D88415F4,
    0x27F1056AE9132136,
    0xA497DC6F12E630A3,
    0x21275FD4B1BD70F2,
    0x9DC9BC9466120C20,
    0x9A68FD5699260EAD,
    0x96F2EA987665551F,
    0x938FB159BA4A423D,
    0x102FA543D43BCC60,
    0x8C9E6F04E0F639F6,
    0x891A23768654F43D,
    0x8584F1C5CB4F55EB,
    0x020E71DF52EDAA7F,
    0x000000001C398F9B,
    0x000000001C398F9C,
];

const CATALAN: Table = [
    0x3FED4F9713E8135D,
    0x3C51485608B8DF4D,
    0xB8F2F39C13BC1EC8,
    0x357C2FF8094A263E,
    0x32168F335DBE5370,
    0x2E96291BBB16163E,
    0x2B324D663F739C43,
    0xA7B36A0725ED0E94,
    0xA40D3A26F9C06FCE,
    0xA0964E42486BFCD2,
    0x1D34F358CFDEC843,
    0x99D1EB82210976AB,
    0x9677D31F6DF5E801,
    0x1313FD19CE3E396A,
    0x8F8C8CBB3852FF3F,
    0x0C2A86EB34EAD01A,
    0x087C68C37800513B,
    0x050D46EBB334D7C9,
    0x819944C5E2711625,
    0x80000000005E2172,
    0x80000000005E2171,
];

/// Enclosure of `ln 2`.
pub fn ln2() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &LN2)
}

/// Enclosure of `ln 10`.
pub fn ln10() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &LN10)
}

/// Enclosure of `1 / ln 10`.
pub fn ln10r() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &LN10R)
}

/// Enclosure of `π / 4`.
pub fn pid4() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &PID4)
}

/// Enclosure of `√2`.
pub fn sqrt2() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT2)
}

/// Enclosure of `√5`.
pub fn sqrt5() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT5)
}

/// Enclosure of `√7`.
pub fn sqrt7() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT7)
}

/// Enclosure of `1 / ln 2`.
pub fn ln2r() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &LN2R)
}

/// Enclosure of `π`.
pub fn pi() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &PI)
}

/// Enclosure of `π / 2`.
pub fn pid2() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &PID2)
}

/// Enclosure of `2π`.
pub fn pi2() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &PI2)
}

/// Enclosure of `π / 3`.
pub fn pid3() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &PID3)
}

/// Enclosure of `1 / π`.
pub fn pir() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &PIR)
}

/// Enclosure of `1 / (2π)`.
pub fn pi2r() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &PI2R)
}

/// Enclosure of `√π`.
pub fn sqrt_pi() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT_PI)
}

/// Enclosure of `√(2π)`.
pub fn sqrt_2pi() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT_2PI)
}

/// Enclosure of `1 / √π`.
pub fn sqrt_pir() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT_PIR)
}

/// Enclosure of `1 / √(2π)`.
pub fn sqrt_2pir() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT_2PIR)
}

/// Enclosure of `π²`.
pub fn pip2() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &PIP2)
}

/// Enclosure of `1 / √2`.
pub fn sqrt2r() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT2R)
}

/// Enclosure of `√3`.
pub fn sqrt3() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT3)
}

/// Enclosure of `√3 / 2`.
pub fn sqrt3d2() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT3D2)
}

/// Enclosure of `1 / √3`.
pub fn sqrt3r() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &SQRT3R)
}

/// Enclosure of `ln π`.
pub fn ln_pi() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &LN_PI)
}

/// Enclosure of `ln 2π`.
pub fn ln_2pi() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &LN_2PI)
}

/// Enclosure of Euler's number `e`.
pub fn e() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &E)
}

/// Enclosure of `1 / e`.
pub fn er() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &ER)
}

/// Enclosure of `e²`.
pub fn ep2() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &EP2)
}

/// Enclosure of `1 / e²`.
pub fn ep2r() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &EP2R)
}

/// Enclosure of `e^π`.
pub fn ep_pi() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &EP_PI)
}

/// Enclosure of `e^(2π)`.
pub fn ep_2pi() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &EP_2PI)
}

/// Enclosure of `e^(π/2)`.
pub fn ep_pid2() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &EP_PID2)
}

/// Enclosure of `e^(π/4)`.
pub fn ep_pid4() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &EP_PID4)
}

/// Enclosure of the Euler-Mascheroni constant `γ`.
pub fn euler_gamma() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &EULER_GAMMA)
}

/// Enclosure of Catalan's constant.
pub fn catalan() -> LInterval {
    static LEVELS: Levels = OnceLock::new();
    cached(&LEVELS, &CATALAN)
}
