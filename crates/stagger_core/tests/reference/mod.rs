//! Reference values for the enclosure tests, computed at 4000 bits.
//!
//! Each entry holds the limbs of `value * 2^SCALE`, split greedily into
//! nearest doubles; what the limbs leave over is below `2^-1074`.

/// Scaling that lifts the last bits of a precision-20 enclosure out of the
/// subnormal range.
pub const SCALE: i32 = 100;

pub struct FunctionValue {
    pub name: &'static str,
    pub arg: f64,
    pub limbs: &'static [f64],
}

pub struct ConstantValue {
    pub name: &'static str,
    pub limbs: &'static [f64],
}

pub const FUNCTIONS: &[FunctionValue] = &[
    FunctionValue {
        name: "exp",
        arg: 0.75,
        limbs: &[
            2.683616341742229e30, -146679930173475.06, -0.00729451558386048,
            -2.972819008336166e-19, 1.3378567908760067e-35, 1.2742211814264055e-51,
            1.527688539753053e-68, -2.2487103613775266e-85, -1.7903903933665553e-103,
            1.0261819247929198e-120, 6.741874489672797e-137, -2.453651427566965e-153,
            -3.0764205078763544e-170, 2.351266150354702e-187, -2.169809649698761e-203,
            -9.660561268570529e-220, 7.302751034799911e-236, 3.495723994301038e-252,
            -1.994924154053751e-268, 1.3077793757578164e-285, -6.96128600824603e-302,
            3.72469e-318,
        ],
    },
    FunctionValue {
        name: "exp",
        arg: -3.5,
        limbs: &[
            3.827973122062403e28, -161753511922.5887, -4.234194798157284e-06,
            1.6700984665623948e-22, 3.325319290323084e-39, 1.972674266578869e-55,
            6.243464175365227e-72, 2.2639955642661593e-88, -1.8398015438716548e-106,
            3.459250101809692e-123, -2.2812516488417544e-139, 1.702790214847338e-156,
            1.4978085866017346e-173, -1.7979081358550735e-190, 4.642387154994555e-207,
            -1.8120738436203256e-224, 3.545133091056133e-241, -2.2616481763480385e-257,
            -3.454089622499765e-274, -1.9312340759816835e-290, 8.792084357551254e-307,
            -4e-323,
        ],
    },
    FunctionValue {
        name: "exp",
        arg: 10.25,
        limbs: &[
            3.5852381241292694e34, 2.0456516788022543e18, 64.32875263509982,
            -1.0401788776811415e-15, -1.916160768250187e-32, 6.7940495812901235e-49,
            2.790392209319779e-65, 1.7180872172207678e-81, 5.773541206170836e-98,
            2.6178138216901383e-114, 1.286281901570376e-131, 8.77372911339297e-148,
            -6.4956772195856155e-164, -3.032257796368225e-180, 3.3258259918586926e-197,
            1.4663786183941217e-213, 3.289074176280337e-231, 1.7413950786312642e-247,
            -1.4924579411801054e-263, 2.713101229571957e-280, 1.968747189118161e-296,
            -4.31224778034e-313,
        ],
    },
    FunctionValue {
        name: "exp2",
        arg: 0.3,
        limbs: &[
            1.5606609545443145e30, -45284787315355.73, -0.0021323393733721414,
            -4.8903684407387765e-20, 1.574923338136114e-36, -1.6480024444472142e-52,
            8.017284159221916e-69, -2.4885278092108834e-85, -1.1142347603623322e-101,
            -5.5504000810040664e-118, 1.4803284751658143e-134, 9.352831716799174e-151,
            -2.6156107378051985e-169, 8.148570961328471e-186, -8.990238471694186e-203,
            2.4444810126527636e-219, -1.533988826149811e-235, 3.059833168455665e-252,
            -2.039859451712159e-268, -8.625855033992059e-285, -5.210052807846819e-302,
            -2.309614e-318,
        ],
    },
    FunctionValue {
        name: "exp2",
        arg: -7.5,
        limbs: &[
            7.002846371848268e27, -478701178569.56775, 2.049372749696314e-05,
            2.4439644946052683e-22, 2.0249749210452265e-39, 1.5377904731599923e-56,
            -9.908968573101149e-73, 1.5174689376819549e-89, -7.293875791494485e-106,
            7.45198934063129e-123, 4.595507189049006e-139, 6.458733911346452e-157,
            -5.605456430910778e-173, -2.2693395227318957e-189, 1.7030458803120893e-205,
            9.957020603535244e-222, -2.6728425669349707e-238, -9.700646527426858e-255,
            3.6993772598408253e-271, -1.7356449302837566e-287, 8.943329204082801e-304,
            4.1986e-320,
        ],
    },
    FunctionValue {
        name: "exp10",
        arg: 0.5,
        limbs: &[
            4.008663174000767e30, -241852737845734.3, 0.013669292280648657,
            -4.1335061305513056e-19, 3.5307355252817305e-36, -6.537206254306716e-53,
            -1.2985904465143453e-69, -3.256905715971947e-86, -2.3718104425328797e-102,
            -6.728949401529394e-119, -2.2188342279823563e-135, 2.4968571537285493e-152,
            1.2744588396552573e-168, -1.0949745915269934e-184, 5.431301091662167e-201,
            -1.338450637310014e-217, 2.9258437526930373e-234, -1.6209837525259165e-250,
            -1.5602524588199686e-267, 8.194493632076858e-284, 1.392432810536524e-300,
            -5.598196e-317,
        ],
    },
    FunctionValue {
        name: "exp10",
        arg: -2.25,
        limbs: &[
            7.12852318410684e27, -211924710851.19846, 3.60819214402584e-06,
            -5.889712157027328e-23, -2.6552214810957755e-39, -1.3281370654741193e-55,
            -3.5983324399765014e-72, -4.968516702253492e-89, 3.5028777598852523e-106,
            -1.983440002864194e-123, 1.0440986637530412e-139, 3.567229029553763e-157,
            -2.855473611953953e-173, 9.610984369406208e-190, 7.39529580559478e-206,
            -6.451400757182e-223, 4.032591546524061e-240, -1.7785277838442782e-256,
            1.094489461516105e-272, 3.3246233290706896e-289, -2.154279988340314e-305,
            4.3e-322,
        ],
    },
    FunctionValue {
        name: "expm1",
        arg: 1e-20,
        limbs: &[
            12676506002.282293, 6.338253001141147e-11, -2.4708413676049748e-27,
            -7.365507285618997e-44, 3.1148602887134956e-60, 5.331282537212824e-77,
            3.3538246735535962e-93, 8.638506523636079e-110, 2.1379258773228767e-126,
            1.3093431531267397e-142, 5.151986429352847e-159, 4.0327742703620695e-175,
            -3.2774273345126288e-192, -7.073073605090276e-209, 2.5504754644353942e-225,
            -6.839049057964569e-242, 3.3802607182048936e-258, -2.2875172600010008e-275,
            3.2034267517464874e-292, 1.3678395406336914e-308,
        ],
    },
    FunctionValue {
        name: "expm1",
        arg: 0.125,
        limbs: &[
            1.6878571644962262e29, -6808218879921.974, -0.00010942492013732026,
            4.539851033386751e-21, 2.355014936200177e-37, 2.9684365971068453e-55,
            -7.834130946954674e-72, -1.2523207191626573e-88, 3.629075780801827e-105,
            -7.838748569570353e-122, 1.6712402029476983e-138, -6.939980781345202e-155,
            -3.9687064759781472e-171, -1.5915506247496052e-187, 3.077755651091507e-204,
            5.384725702053435e-221, 1.1369041835538579e-237, 3.011367817377843e-254,
            -7.953290631969644e-271, 4.7307868193985926e-287, -1.4210660134536426e-303,
            3.2134e-320,
        ],
    },
    FunctionValue {
        name: "expm1",
        arg: -2.0,
        limbs: &[
            -1.0960927472012799e30, -13213754368986.373, -0.0006915184077578039,
            8.613100042006128e-21, 6.459149962943953e-37, -3.4991573690515324e-53,
            -9.630926617483929e-70, 6.647130378796454e-87, -1.4247685640373444e-103,
            -1.4968638705002509e-120, -2.5278732655449905e-137, 1.3908996029731698e-153,
            3.309202084350295e-171, 2.2674576840587743e-187, -5.6240101651137595e-204,
            -1.3195926615254426e-220, 8.415590246885618e-237, 3.3542683919229312e-254,
            1.8481101324272566e-270, 4.4521708608296273e-287, 8.600507005253825e-304,
            5.666e-320,
        ],
    },
    FunctionValue {
        name: "expmx2",
        arg: 1.5,
        limbs: &[
            1.3360939027943726e29, 5394404330639.903, 5.246745434891182e-05,
            -5.504056234118966e-22, -4.502757565599287e-38, -1.0511832847818488e-54,
            1.3103152113679034e-71, 2.7760524942640314e-90, -6.866578039205963e-107,
            -4.1147243761720916e-123, -2.028899110572028e-139, 9.456255802870448e-156,
            -7.57093955799709e-172, 4.9677334011976684e-188, -2.4580905327947208e-204,
            1.581471149920193e-220, -8.106659019490456e-237, -1.0569703474343321e-253,
            6.040650349775771e-270, -1.8642197616512447e-286, -7.915899264033501e-303,
            1.9299e-319,
        ],
    },
    FunctionValue {
        name: "ln",
        arg: 0.001,
        limbs: &[
            -8.756620125631426e30, -273983498920098.12, 0.0064450106765941515,
            -2.0084838009420524e-19, -1.1922558573269096e-36, -2.1267210251217995e-53,
            -1.1468949679826312e-69, -4.088883837391892e-86, -3.466038046589805e-102,
            4.0915066337271436e-119, -1.9246898684713895e-135, 1.3920893408224605e-151,
            -4.82483075753889e-168, 1.2964353932659569e-184, -5.28110272974907e-201,
            -1.6308931461086734e-217, 5.309552694250006e-234, -3.1989189439746385e-250,
            -1.969180652311927e-267, 6.327470539471033e-284, -5.090697461879425e-300,
            -4.9083367e-317,
        ],
    },
    FunctionValue {
        name: "ln",
        arg: 2.5,
        limbs: &[
            1.1615364962438363e30, -52495887951903.79, 0.0015213677011830747,
            1.4485166628475855e-20, 7.964740161074655e-37, 2.030470102644813e-53,
            -9.369430242937028e-70, -3.7303610696090916e-86, -3.1748468564659134e-102,
            5.68932431680307e-120, -2.054162029469351e-136, 1.476941455145329e-152,
            5.342054164914584e-170, 1.762587703862528e-186, 1.277971721287892e-203,
            1.3582058279814238e-221, 4.142292759245832e-238, -1.914859503796197e-254,
            1.6082016050823111e-270, 1.1070719451100653e-287, -3.922774551134586e-304,
            2.4644e-320,
        ],
    },
    FunctionValue {
        name: "ln",
        arg: 10000000000.0,
        limbs: &[
            2.9188733752104755e31, -499960615834424.94, -0.0015655629323971711,
            1.0395893586389627e-19, 3.7758215193884375e-36, 7.419413622431757e-53,
            3.7656777574380704e-69, 2.2311124844311178e-85, -6.154254740409387e-102,
            -3.2487389351086316e-118, -7.742125538480119e-135, -4.348129648574131e-151,
            1.2510987480482651e-168, -4.291718121041295e-185, -3.0554405752128343e-202,
            9.838715167109684e-219, 6.658707615607164e-236, 2.551655514072706e-252,
            2.111657970110446e-268, -3.5018804373166445e-285, -1.6242677936540002e-301,
            -6.167283e-318,
        ],
    },
    FunctionValue {
        name: "log2",
        arg: 3.0,
        limbs: &[
            2.009178665378409e30, 134114660393120.4, 0.002851311655143771,
            1.163834980280328e-19, 3.627497978325536e-36, -3.262731120705798e-53,
            -1.050690777420622e-69, -3.7037287734122776e-86, -3.5290557378285967e-102,
            1.125877951191693e-118, -4.059868362296682e-135, 2.7386027476156193e-151,
            9.08832791721898e-168, -3.539829312204273e-185, 9.393767524317199e-202,
            3.1974095167514013e-218, -1.9855218105286565e-234, -4.0382989479935755e-251,
            -2.1334942662438526e-267, 5.952688544128806e-284, 1.292189515443678e-300,
            2.7189934e-317,
        ],
    },
    FunctionValue {
        name: "log10",
        arg: 7.0,
        limbs: &[
            1.0712890376757729e30, 22774382824064.375, -0.0005771145140835629,
            -1.939195282911865e-20, -8.385190758922724e-37, -7.539844170464933e-53,
            1.3897100643594071e-72, 7.481320857781787e-89, -2.949675433934171e-106,
            -1.962214088116898e-122, 9.852379206612663e-139, 3.624204312471882e-155,
            -1.5690798021630066e-172, 2.5699526767972954e-189, -1.9431683967477288e-206,
            3.2733815017253342e-223, -3.9738454796847586e-240, 4.805316510535621e-257,
            3.04424054252601e-273, 3.8334856876916667e-290, 2.4614737447680235e-306,
            -2e-323,
        ],
    },
    FunctionValue {
        name: "lnp1",
        arg: 1e-12,
        limbs: &[
            1.2676506002275955e18, 30.699886307874948, 4.3912321646714874e-16,
            2.6260066068813875e-33, 1.562177473920319e-49, -4.482046981177641e-66,
            1.2722475036187916e-82, 1.0570103269711151e-99, -4.825276463966792e-117,
            6.110326668590056e-135, -2.3125282633584965e-151, 4.074430428020154e-168,
            1.6762864167522527e-184, -2.5622152514581938e-201, -6.318751924152987e-218,
            -1.5732377797091757e-234, -8.243652117479915e-251, 3.45535238164139e-267,
            1.8202821947614914e-283, -8.277783357958769e-300, 6.0320733e-316,
        ],
    },
    FunctionValue {
        name: "lnp1",
        arg: 0.5,
        limbs: &[
            5.139880876649185e29, -3652276347951.92, 0.0001278165310053981,
            -9.213563632088245e-21, 6.945735477998257e-37, 8.283110683764021e-54,
            -3.201954529453176e-70, 1.4726004832832902e-86, -2.8313813271114455e-103,
            1.8933276037344418e-119, -3.2987937003397676e-136, 9.466636903911213e-154,
            5.589468937678852e-170, -3.262849290299811e-186, -1.091193185654281e-202,
            5.795629223910667e-219, 5.779197059792147e-235, -2.4144700479965475e-251,
            -1.8421778770823255e-267, -2.031660053732923e-284, 3.0709536580234983e-301,
            -5.54411e-318,
        ],
    },
    FunctionValue {
        name: "sqrt",
        arg: 2e-12,
        limbs: &[
            1.7927286711931563e24, 114235426.2888565, 2.9400806601242964e-09,
            -1.2425373127040698e-25, -2.4323931376116956e-42, -1.5633931935855514e-58,
            1.459041888334257e-75, -1.973517866823349e-92, 1.1824609258070226e-108,
            4.887096110371021e-125, 1.9125462169437307e-141, -4.903001758208971e-158,
            3.4460450893912494e-174, -8.24583927525984e-191, -1.323818911879219e-207,
            -7.437629257430908e-224, 4.77426604862246e-240, -2.640182382830757e-256,
            -8.688537587765546e-273, -7.57619804269218e-290, -4.357893159963897e-306,
            -2.03e-322,
        ],
    },
    FunctionValue {
        name: "sqrt",
        arg: 7.8e-09,
        limbs: &[
            1.1195586963272683e26, -1226379598.5338514, -2.5429692054393056e-08,
            6.877001247270821e-25, -6.418205433354329e-42, -3.564554533923968e-59,
            8.104259259090231e-76, 2.737790194823788e-92, 1.069233856933516e-108,
            6.595382898366666e-125, 2.935517917818198e-141, 1.8439466239181915e-157,
            -1.6932589904676543e-174, 9.457126185646304e-191, -2.8418876285220503e-208,
            -2.445088330029511e-225, -2.6891273156881784e-242, -7.551022693660019e-259,
            -2.510956921545416e-275, -4.682466733883001e-292, 7.924580810071236e-309,
        ],
    },
    FunctionValue {
        name: "sqrt",
        arg: 7.0,
        limbs: &[
            3.3538882375256533e30, -159304992792067.78, -0.0014335316013788274,
            -2.6239927484596784e-20, -6.792528293050831e-38, 3.584117580149328e-55,
            3.3580411299251285e-72, -1.8779044323494965e-88, 8.311056492767486e-105,
            1.1577491464962313e-121, 8.594243001364496e-138, 2.9030754087285604e-154,
            -1.770061612624809e-171, -1.0081344089958826e-188, 4.528765033625667e-205,
            1.130660232456192e-221, -6.504723904445953e-238, 4.6182403345676325e-254,
            -1.1550335746423986e-270, 7.071952975068605e-287, 5.7492102195432436e-303,
            -1.1429e-319,
        ],
    },
    FunctionValue {
        name: "sqrt1px2",
        arg: 0.75,
        limbs: &[
            1.5845632502852868e30,
        ],
    },
    FunctionValue {
        name: "sqrtp1m1",
        arg: 1e-09,
        limbs: &[
            6.338252999556584e20, 23722.699467539835, 6.532719764014996e-14,
            3.587111973498834e-30, 9.20735857995581e-47, 5.392138121928206e-63,
            6.342390103420772e-80, -1.7703239442373963e-96, 3.615548360203873e-113,
            1.7389217435859662e-131, 5.296669644959086e-148, 7.558697947630952e-165,
            -3.3508047824150214e-181, -1.3253979245107023e-197, -4.490757098581671e-214,
            3.688452053220201e-230, 1.8196828478583014e-246, 3.929683730275075e-263,
            6.210694650445897e-280, 2.560874456907929e-296, -8.41201373042e-313,
        ],
    },
    FunctionValue {
        name: "sqrtp1m1",
        arg: 3.5,
        limbs: &[
            1.4214424065615054e30, -43083764215386.01, 5.709135883384641e-05,
            -1.0194534996393345e-21, 2.5273985155102983e-38, 6.848718425355504e-55,
            5.4168202576598094e-71, -2.2159780128450887e-87, -5.684510553356889e-104,
            2.8615639068024153e-120, 4.489847705764369e-138, 2.4801538219570373e-154,
            -4.964109484141199e-171, 4.788509524928619e-188, 1.6069141169597995e-204,
            -7.166897086638424e-221, -4.3530241748388075e-237, 9.40573916787759e-254,
            5.768474931475238e-270, 5.99965629576347e-287, 5.1157797293627283e-303,
            -6.6225e-320,
        ],
    },
    FunctionValue {
        name: "sqrtx2m1",
        arg: 1.25,
        limbs: &[
            9.50737950171172e29,
        ],
    },
    FunctionValue {
        name: "sqrt1mx2",
        arg: 0.6,
        limbs: &[
            1.0141204801825836e30, -35184372088832.0, -0.0006103515625,
            1.2705494208814505e-20, -4.481572212509971e-37, 1.6975987405027411e-53,
            -7.026994722691119e-70, 3.045969767880607e-86, -1.36870096526138e-102,
            6.312988561571264e-119, -2.972149258805878e-135, 1.4223667054393387e-151,
            -6.898812499300929e-168, 3.383684833583302e-184, -1.675384968610157e-200,
            8.36302879638633e-217, -4.204059544193446e-233, -2.343020277250721e-249,
            4.6923247990314436e-266, 1.3300240631774245e-282, -1.7097190420589896e-299,
            1.270370734e-315,
        ],
    },
    FunctionValue {
        name: "sin",
        arg: 1.0,
        limbs: &[
            1.0666911989663693e30, 2252418748572.3164, -0.0001867318948673813,
            -2.3089038444497362e-21, -7.571916974735511e-39, -2.2416534175952563e-57,
            -8.810066489038404e-74, 1.6364696112365963e-90, -9.962321949701699e-108,
            6.770455356322216e-124, 3.359754957538204e-140, -1.0323939422491196e-156,
            -4.317039150932707e-173, 1.4210118678367695e-189, -2.6948887582354096e-206,
            -5.213734543027518e-223, 1.6037453240109944e-239, -1.2690286266859023e-256,
            -4.653964714638356e-273, 8.795196498834321e-290, 6.181133336751618e-307,
            -3e-323,
        ],
    },
    FunctionValue {
        name: "sin",
        arg: 100.0,
        limbs: &[
            -6.418947088877379e29, -3867534864004.1226, 0.00010596460872729015,
            4.640935193096126e-21, -7.586449396136807e-39, -2.9854280715672376e-55,
            -5.013983623779396e-72, 7.429525938557591e-89, -5.241623558858595e-105,
            -7.320619623730525e-122, 2.2187234365619897e-138, 1.740278862459275e-155,
            9.097310063132516e-172, -5.598572701346214e-188, 2.3126285320618185e-204,
            -6.693049691610994e-221, 3.7734098576237975e-237, -2.5767500091270412e-254,
            1.5364207877603348e-270, -1.7750267205145738e-287, -9.971774290608611e-304,
            2.2623e-320,
        ],
    },
    FunctionValue {
        name: "cos",
        arg: 0.5,
        limbs: &[
            1.1124680613301583e30, -54031261509072.31, -0.0012573997033530951,
            3.372573924032438e-20, 2.2214167812834253e-36, 5.06116034049126e-53,
            4.3001960044255103e-72, 4.45219704232287e-89, -9.630874823613698e-106,
            -5.45025228175334e-122, -2.967938157840647e-138, -1.4457493102846709e-154,
            -1.7570572271392753e-171, 4.5358930170325846e-188, -4.798866381520221e-205,
            -3.156869137860122e-221, 2.1759014977225989e-237, -1.177748553557115e-253,
            -9.604332662718688e-271, 3.366001335211194e-287, -3.252580457670927e-304,
            -4e-321,
        ],
    },
    FunctionValue {
        name: "cos",
        arg: -25.0,
        limbs: &[
            1.256498839406641e30, 13577351817743.994, 0.00017464020799890737,
            -1.0146649510157343e-20, 3.4046538794390072e-37, 1.4072138886399262e-53,
            1.0017270366939112e-69, 5.7934792188523986e-86, -1.271363621407362e-102,
            -7.238142614616698e-119, -3.3347532281421916e-135, 1.8126510274790692e-151,
            -2.0900997191821562e-168, 7.331693681847914e-185, -4.074788357769289e-201,
            2.6175824505577784e-217, -1.4268598156360762e-233, 1.102468941554701e-250,
            2.7365763249095794e-268, -2.435467504250692e-284, 1.0688902389385708e-300,
            -1.1537767e-317,
        ],
    },
    FunctionValue {
        name: "tan",
        arg: 0.75,
        limbs: &[
            1.1809388116185971e30, -17173346158911.91, -0.0002178663646973886,
            -4.236952433385705e-21, 1.082166245511036e-37, 3.624680866163745e-55,
            1.3608451608737542e-71, -9.537171348676912e-88, 2.182466399338764e-104,
            -7.370927483904025e-121, -3.789674400720241e-137, -4.612191256593244e-154,
            9.274080551246176e-171, 9.058882029402569e-187, -3.420700065617515e-203,
            -6.1475580206460856e-220, -9.283828022532298e-238, -3.579987527770124e-254,
            -1.3653858672262208e-270, 6.104243648398573e-287, -2.998814792465412e-303,
            8.336e-320,
        ],
    },
    FunctionValue {
        name: "tan",
        arg: 1.5707963267948966,
        limbs: &[
            2.0702305368548992e46, -3.0934764461435898e29, -4306271074622.983,
            -7.708476578886279e-05, 2.752378222696005e-21, -1.78026248563803e-37,
            -6.89697504788854e-54, 2.355937904769318e-70, 6.476857953755019e-87,
            3.2944646307316766e-103, -2.0771340758616123e-119, 1.0337416296734134e-135,
            2.500057381753381e-152, 9.722877310872839e-169, 5.50509581171033e-185,
            2.4885272717198223e-201, -4.951343862149507e-218, 1.203981427260858e-234,
            -5.475323517868868e-251, -1.4514710047546735e-267, -1.682123080119956e-286,
            9.185325755780084e-303, -3.93686e-319,
        ],
    },
    FunctionValue {
        name: "cot",
        arg: 0.3,
        limbs: &[
            4.097969771819441e30, 164659364473962.03, -0.014414280934130318,
            6.680856793212551e-19, -4.6189135912482045e-35, 2.4253487999731544e-51,
            -6.707667808257929e-68, -3.2515704245176803e-84, 1.543079572976614e-100,
            -7.87157785372427e-118, -8.401993118205559e-135, -3.498375761539525e-151,
            -6.246227215316746e-168, -1.1971453809108051e-184, 8.336901631877555e-201,
            7.0280583803566386e-217, -2.10563505149603e-233, 1.5382842792481028e-249,
            5.88250336317483e-266, -2.0486024512751778e-283, -1.9981918189053987e-300,
            1.21314257e-316,
        ],
    },
    FunctionValue {
        name: "cot",
        arg: 3.141592653589793,
        limbs: &[
            -1.0351152684274496e46, 1.5467382230717952e29, 5779369698647.545,
            0.00031016507118572306, 1.4621745290677255e-20, 9.766754588735391e-37,
            -2.8168821937591916e-53, -1.8860702425382558e-69, -4.209419787012842e-86,
            -3.3622418774060924e-102, -1.4098094526069436e-118, 9.74660077787042e-135,
            -5.757957123626958e-151, -1.992574853593267e-167, 1.7992213759416566e-184,
            -1.0722947008288486e-200, -2.0262418938942176e-217, -9.882131827025139e-234,
            2.206303679042843e-250, 8.16411502606487e-268, -5.1979664829868584e-284,
            -1.2684264103872973e-300, -1.3235386e-317,
        ],
    },
    FunctionValue {
        name: "asin",
        arg: 0.3,
        limbs: &[
            3.862438257477509e29, -34822032463962.625, 0.0015769928445516,
            7.930550244292675e-20, -2.7226500232252386e-36, 4.3867125887915777e-54,
            2.883213226198106e-70, 7.202897448414956e-89, 4.9123947493663774e-105,
            -2.724500911521716e-121, 1.4693668974785075e-140, -5.222356800865619e-157,
            -1.835469435444153e-173, 3.790401805617023e-190, 4.615878448674378e-208,
            1.2877057160955323e-224, 9.539856580432621e-241, -3.462545151645853e-257,
            -2.1262958707538324e-273, -8.490283065493436e-291, 3.0451187779583755e-307,
            1.5e-323,
        ],
    },
    FunctionValue {
        name: "asin",
        arg: 0.9,
        limbs: &[
            1.419476497805292e30, 51880407953110.86, -0.0007260213983013479,
            -5.628493730107487e-21, 1.6813178939973295e-37, 3.2820931431874886e-54,
            -2.1079690654373933e-70, 1.8429345466675796e-87, -6.447483422875778e-104,
            4.323589156163862e-121, -3.6289597316848346e-137, 1.1759376243521633e-153,
            -4.646850716418399e-170, -1.408958378859898e-186, -7.916420123795491e-203,
            -3.66758459659528e-219, -9.469006148713938e-236, -2.475874065552292e-253,
            1.309496776942405e-270, 8.55244911324245e-287, -3.6637309474491756e-303,
            1.48946e-319,
        ],
    },
    FunctionValue {
        name: "acos",
        arg: 0.2,
        limbs: &[
            1.7359694173472777e30, -106141439926392.08, -0.0003631997450813125,
            4.309836083388787e-21, 2.9836423357628014e-37, -1.7792296773414842e-53,
            -9.836209814485334e-70, -1.4438524828312987e-86, -3.944800825988736e-103,
            9.967740450173042e-120, -4.525697614915158e-136, -3.630973097554857e-152,
            -1.7123355723978768e-168, 1.1178596992875072e-184, -5.845044005678342e-201,
            2.773350720165479e-217, 1.1981758709595073e-233, -5.2123896453981e-250,
            -2.972428947202058e-266, -1.3779421498946322e-282, 2.882184521141894e-299,
            -1.07296306e-315,
        ],
    },
    FunctionValue {
        name: "acos",
        arg: -0.95,
        limbs: &[
            3.579886144195566e30, -121365201524451.53, 0.003980682995885908,
            -1.8007752542798564e-19, -3.8139124948534276e-36, -2.0868855951091263e-52,
            5.827067826076973e-69, 2.376392715466024e-85, -2.347270152445248e-103,
            -1.453606158374561e-119, 1.3056099830269977e-135, -6.8364020620576685e-152,
            -2.0149662688991644e-168, -9.760503037616724e-185, -2.2965314780134686e-201,
            -1.0357873300431014e-217, -8.091760051558271e-234, -9.973310538054244e-251,
            -7.425521414913412e-267, 2.774385577146127e-283, -1.3535908227173374e-299,
            3.9513481e-316,
        ],
    },
    FunctionValue {
        name: "atan",
        arg: 0.5,
        limbs: &[
            5.8774316984425526e29, 28774118862693.883, -0.0006651814468317498,
            -4.3854660295657656e-20, -5.8982413650009065e-37, 2.9067600658635736e-53,
            -2.532234627215331e-70, 1.2999747450218946e-86, 1.7300415073854e-104,
            -1.3827557929356855e-120, 7.29909023062932e-137, 1.2129708667005587e-153,
            -2.4549219750413762e-170, -1.5601546529604634e-186, -9.981759410385475e-203,
            2.0346982418509208e-219, -1.5562625557793505e-235, 5.0488391857059334e-254,
            2.113542021554487e-270, -5.740330784929462e-287, -3.583354622034135e-303,
            -1.5053e-319,
        ],
    },
    FunctionValue {
        name: "atan",
        arg: 40.0,
        limbs: &[
            1.9595362413642438e30, -1622817772403.4536, -8.91175963111712e-05,
            -2.1793459043420834e-21, 5.5777895536952924e-39, -1.6285726834729597e-55,
            6.100341920405721e-73, -3.706172234248032e-89, 7.669386090482512e-106,
            2.1416907964333236e-122, -9.261272659365702e-139, 6.2717223573796485e-155,
            2.4896468339740422e-171, -1.9666476274184778e-187, 4.213630551706987e-204,
            -3.0914277601546268e-220, -5.025070928804904e-237, -4.001216062586124e-253,
            -2.3746069016168558e-269, 1.01999202532542e-285, 9.16762566233618e-302,
            4.34226e-318,
        ],
    },
    FunctionValue {
        name: "acot",
        arg: 0.25,
        limbs: &[
            1.6806735571419702e30, -111862931925607.77, 0.0038334462936231023,
            1.715601568305806e-19, -3.887748972152307e-36, 2.9734361733738404e-52,
            -5.265300254520303e-69, 2.193359111321556e-85, 9.166971585455497e-102,
            -4.14278331409134e-118, -4.4928014307543226e-135, -1.122242674820263e-151,
            -6.614505084279045e-168, 2.446269889041365e-184, -5.630013718714218e-203,
            -2.4871772403562377e-219, 6.894360150529198e-236, -8.737642838679199e-253,
            3.8271229428364876e-269, 2.6511463986613906e-285, 1.3062106515982668e-301,
            -4.24086e-319,
        ],
    },
    FunctionValue {
        name: "acot",
        arg: -3.0,
        limbs: &[
            3.574574529591028e30, 74837193435534.05, -0.003512422756957875,
            1.7033080151318322e-19, -7.234080083701711e-36, -6.225333306823594e-52,
            -3.0976415011918963e-68, 6.102602457207159e-85, 2.70954699543807e-101,
            -1.545607365084939e-117, -7.085854852734454e-134, -6.897899198331037e-151,
            -2.7480042780729696e-167, -3.193510969446864e-184, -4.9610500265237914e-201,
            -1.2711275342653586e-218, 6.415340428680785e-235, 9.148472180002925e-252,
            -3.1340579220434904e-268, 2.4732302203731356e-284, -2.8302881534003435e-301,
            -1.5922417e-317,
        ],
    },
    FunctionValue {
        name: "sinh",
        arg: 0.125,
        limbs: &[
            1.588692942084682e29, -5474108119250.467, -0.00021253576236162375,
            3.2019292768257983e-21, -6.318081735086476e-38, -3.238705077022762e-54,
            1.585373706939712e-70, -1.1858324051763502e-86, 1.7319493818883208e-103,
            -1.0113734218772647e-119, -3.113600719424666e-136, -3.887221358887811e-153,
            -1.9332512679758116e-169, 7.715165507893938e-186, -1.507280260726768e-202,
            -8.559563151276744e-219, -1.884441438340011e-235, -1.2414246638856229e-251,
            8.506946581034733e-271, 4.3210225990960603e-287, -1.2897514321531442e-303,
            7.1467e-320,
        ],
    },
    FunctionValue {
        name: "sinh",
        arg: 3.0,
        limbs: &[
            1.2699165164742493e31, -884553626775787.9, -0.0007693668923448657,
            4.879394620518266e-20, 1.8647257850010648e-37, -5.0173895275568166e-54,
            1.502405592160222e-70, 1.1423305456003607e-86, -4.3565215119137407e-103,
            1.9378493591577614e-119, -5.989930368056263e-136, -3.4363981856975447e-152,
            -6.361634697265974e-169, 3.779435729940399e-185, 1.0660514858517935e-201,
            5.017042006115622e-218, 4.256165489791268e-234, -2.3434503452304333e-250,
            1.2568649631335713e-266, -6.439294923401019e-283, 4.74883788094603e-299,
            -2.219668757e-315,
        ],
    },
    FunctionValue {
        name: "cosh",
        arg: 0.5,
        limbs: &[
            1.429435731626805e30, 110329717911648.5, 0.0002217774279441547,
            6.6923586229260094e-21, 2.0611659580170047e-37, -2.0379011031266133e-53,
            -1.8780605754205107e-70, 5.3499468884649575e-87, -1.3473577635297303e-103,
            1.2159636944912984e-119, -3.3698246295851224e-136, -1.5599921445256797e-152,
            -6.48884432214364e-169, 2.6679191533289785e-185, 1.1782562013422103e-201,
            -6.790611852789526e-218, -4.001995458332407e-234, -1.7898879477041438e-250,
            1.547643681158008e-266, -7.262539673569505e-283, -2.3421355817789866e-299,
            1.079156657e-315,
        ],
    },
    FunctionValue {
        name: "cosh",
        arg: -4.0,
        limbs: &[
            3.4617297745748542e31, 107505801616889.38, 0.0037093064588109024,
            2.964058069229009e-20, 2.7060170647999702e-36, -9.877097362923957e-53,
            1.098004291971398e-69, -5.1693301825714806e-86, -2.394614678369133e-102,
            -1.4045927483217701e-118, -7.417364463102931e-135, 8.970116829677398e-152,
            3.281775878174635e-168, -1.9638770491441235e-184, -1.2771129935210314e-200,
            6.973495060610818e-218, 4.531893829040274e-235, 2.1534451665267094e-251,
            1.5229185367878315e-267, -9.090341536106794e-284, -4.3286975205965696e-300,
            -1.749336e-316,
        ],
    },
    FunctionValue {
        name: "tanh",
        arg: 1e-25,
        limbs: &[
            126765.06002282295, -4.2255020007607655e-46, 3.702388137053829e-62,
            -3.458178693189775e-79, 2.166535324699102e-95, -1.3847654075259967e-112,
            9.875384208797332e-129, 4.323689595388084e-145, -1.0354695396582048e-161,
            -6.713206355499462e-178, 3.992894780579443e-194, 2.8305353309744413e-210,
            6.323746933900419e-227, 2.9948894400768095e-243, 2.2740562195764162e-259,
            3.4382754800991455e-277, 2.3975710021176075e-293, -1.008521725088794e-309,
        ],
    },
    FunctionValue {
        name: "tanh",
        arg: 0.03,
        limbs: &[
            3.8018113257137126e28, 687540429321.8826, 5.631518501376883e-05,
            9.095770180539628e-22, 1.6804611173232036e-38, 4.774777109842034e-55,
            -2.165480259164793e-71, -4.9962151190162893e-88, -1.5586438947265166e-104,
            9.150801722296014e-121, -4.482470674569262e-137, 4.1951960147677944e-153,
            -9.949696485466631e-170, 6.232939615184503e-186, -2.7246079213075927e-202,
            2.808914976437828e-219, 6.026974863306294e-236, 1.6410626456436187e-252,
            -3.1380351204184626e-269, -6.787394296147261e-286, 3.0084004557618396e-302,
            2.463816e-318,
        ],
    },
    FunctionValue {
        name: "tanh",
        arg: 2.0,
        limbs: &[
            1.2220501405196768e30, -24609599004171.926, -0.0012470677842500897,
            1.7281241105935527e-20, -8.993994695279856e-39, -1.7886462207786256e-55,
            -4.825182232481544e-72, 4.123315710165704e-88, -4.4185503236055585e-105,
            -4.392447902133312e-122, -4.770820847380281e-139, 1.862671510419687e-157,
            1.1105933673981214e-173, -8.793730145541033e-190, 1.8145557063292225e-206,
            1.1484352619061851e-222, -2.833758303601827e-239, -1.706484715529309e-256,
            -1.45547782177842e-272, -4.808351552581425e-289, 3.6895737019125176e-305,
            1.087e-321,
        ],
    },
    FunctionValue {
        name: "coth",
        arg: 0.75,
        limbs: &[
            1.99583199415445e30, -122863893169691.44, -0.001976693799116895,
            1.3012352174403505e-19, -3.9133850111070805e-36, -1.0039864626979199e-52,
            -9.01147899222874e-70, 6.124296152152971e-87, 1.6169316049938983e-104,
            1.4582927682384842e-120, -7.028675957084263e-137, -3.8568462757097534e-153,
            2.179851484273703e-169, 1.3765397101789814e-185, -2.895439155323249e-202,
            1.6840949957902612e-218, -3.736669124005628e-235, -6.226096138963775e-252,
            2.822489695740121e-268, 1.2344636788033472e-284, -3.74894177067605e-301,
            3.203217e-317,
        ],
    },
    FunctionValue {
        name: "coth",
        arg: 5.0,
        limbs: &[
            1.2677657079505393e30, 61047922066006.125, 2.3249321996148e-05,
            -1.0854578830672833e-21, 1.248787324981499e-38, 3.702078929815625e-55,
            -1.2070203767228666e-71, 2.604632935410631e-88, 1.2011677224790335e-104,
            -2.9775878919050606e-121, -1.9725948401446795e-137, -3.0318919277289953e-155,
            1.3674775679705965e-172, 7.45343016235087e-189, 5.883616778751444e-206,
            4.5980203997559086e-222, -2.3740497372910633e-239, 1.410666842439107e-255,
            1.1261889279932429e-271, -6.440874341199665e-288, 1.6645713327268228e-304,
            -2.653e-321,
        ],
    },
    FunctionValue {
        name: "asinh",
        arg: 0.25,
        limbs: &[
            3.1370100851674457e29, -3183407350837.495, 0.0002280084708264442,
            9.99542564015071e-21, -4.828677714491642e-37, -3.227780341384128e-53,
            8.488690771809823e-70, 3.5018764905126945e-86, -1.8065418508163137e-102,
            1.1814472043858853e-118, -2.700410578618408e-135, 1.0388291517169739e-151,
            -4.703585592702341e-168, 3.3380010363941087e-184, 2.2465656178052872e-200,
            1.2701589149274771e-216, 6.9305231454272575e-233, -2.1413321386750927e-249,
            4.521992543025724e-266, -1.067500868802113e-282, -5.442699877889119e-299,
            -4.66714698e-315,
        ],
    },
    FunctionValue {
        name: "asinh",
        arg: -6.0,
        limbs: &[
            -3.1587062258419314e30, -276341148419507.1, -0.007378301936808621,
            -1.0370176518626104e-19, -3.963295445048564e-36, -2.2611305418301443e-52,
            3.840336533828364e-70, 5.708325881476536e-87, 7.73233860084787e-106,
            6.703690563296632e-123, -6.698458063731001e-139, -4.1117265610594974e-157,
            -2.4026502160460613e-173, -6.208257349660376e-190, -1.3241581469707567e-206,
            -3.763720907092804e-223, 2.5086704725496503e-239, -1.6225725055618434e-255,
            1.1776017494770662e-271, -5.21533336993092e-288, 2.07310229210978e-304,
            -2.91e-321,
        ],
    },
    FunctionValue {
        name: "acosh",
        arg: 1.000000000001,
        limbs: &[
            1.792808356733448e24, -11552335.913634276, -2.822584666489413e-10,
            5.689205726019801e-28, -2.327619025746507e-44, -1.651475195688073e-60,
            -9.533420748569192e-77, 6.804882135823164e-93, -2.1450273500704007e-109,
            3.700494615859281e-126, 1.2824124904567958e-143, 2.8410074294901396e-161,
            1.3914501287944672e-177, -1.1022268213089204e-194, 5.127185494774308e-211,
            -4.178158967778141e-227, -1.9214498854392683e-243, 8.9488064823971e-260,
            -5.253256389790331e-276, 3.1012778763948043e-292, -5.986460447063394e-309,
        ],
    },
    FunctionValue {
        name: "acosh",
        arg: 1.0000000039,
        limbs: &[
            1.1195587104089973e26, -1495532663.8306098, -9.681678235585427e-08,
            4.9417821984508806e-24, -2.4269717429386762e-40, -9.248635031787807e-57,
            9.2820439413752e-74, -2.306970993688378e-90, -4.0678485572848726e-108,
            -5.616790959557083e-125, -3.675882797854472e-141, 4.611960442561557e-158,
            2.0458112398705127e-174, -4.0484996783792725e-191, -4.88646957524165e-208,
            8.772857746517414e-225, 1.0006511847453507e-241, -6.376345871938028e-258,
            2.2195515153490983e-274, -7.97338978030043e-291, 6.9290069018774365e-307,
            -3e-323,
        ],
    },
    FunctionValue {
        name: "acosh",
        arg: 1.0000001,
        limbs: &[
            5.669105782069917e26, 33675615421.24291, -6.797912517273779e-08,
            -2.2053344028779737e-24, -1.4126763913987528e-40, 1.4372733495312953e-57,
            2.6791509266737764e-74, -1.2347503755943595e-90, -8.055586574159982e-107,
            1.1194269960186566e-123, -2.4741194196424716e-140, -5.106650725711449e-157,
            -2.1220043481673846e-173, 1.0958427038507017e-190, 6.00812520208088e-207,
            -2.5584482501354085e-223, 5.107366405678716e-240, -5.1189165064672685e-256,
            2.4503344867282228e-272, -1.357924260017295e-288, -7.829110119216006e-305,
            -4.25e-322,
        ],
    },
    FunctionValue {
        name: "acosh",
        arg: 3.0,
        limbs: &[
            2.2345475132212626e30, -57058117037637.71, 0.0007521197325850576,
            -5.1730390175993165e-20, -2.7312517520307483e-36, -6.4669146131850775e-53,
            -4.7402733385448386e-70, -1.6053225808519996e-86, -6.842251264808564e-104,
            5.536174907080015e-120, -2.5659197771202212e-136, 6.70098905943476e-153,
            -2.048935553293827e-169, -1.0000623133173699e-185, -6.198947048206762e-203,
            -5.277924490015117e-219, -1.4900096183919094e-235, 3.1345548359294516e-253,
            5.620077157467318e-270, 3.6816319874625167e-286, 1.689226303954072e-302,
            -6.27394e-319,
        ],
    },
    FunctionValue {
        name: "atanh",
        arg: -0.9999999999,
        limbs: &[
            -1.5033701043319408e31, 950826849928441.4, -0.0349854629303115,
            -1.987063288621333e-18, -1.201821072749575e-34, -8.005723159402926e-51,
            3.7722092463505434e-67, 1.8210460316522916e-83, 1.3609517563541829e-99,
            5.231813598486989e-116, -3.651140518181096e-132, 2.5533127028510862e-148,
            -8.816689450192647e-165, -9.3353882105425e-181, -9.762012992042328e-198,
            -6.011376641422518e-214, 1.7913018367404995e-230, 1.0010615787852722e-246,
            -1.9622534563206253e-263, -3.447017811200737e-280, -2.1938069253652987e-296,
            1.292365069004e-312,
        ],
    },
    FunctionValue {
        name: "atanh",
        arg: -0.99999987,
        limbs: &[
            -1.048909788317732e31, -1070741841604582.6, -0.022626851885043577,
            3.8129580255801896e-19, -1.1798005643794272e-35, 6.4118444052838764e-52,
            2.7308645514525816e-68, 8.017587654513129e-85, -1.6692358761093029e-102,
            -3.632214546107516e-119, 4.801805213512041e-136, 9.278326069512898e-153,
            3.533465739081735e-169, -1.5822634550725945e-185, 3.792011854949398e-202,
            -2.1562255780513742e-218, -5.107017511807816e-235, 9.08471677281113e-252,
            3.3094404465127455e-268, 1.416339586673605e-284, -8.119424651174606e-301,
            3.096616e-318,
        ],
    },
    FunctionValue {
        name: "atanh",
        arg: 0.125,
        limbs: &[
            1.5928944292815244e29, 14510764334807.137, -0.0005983613668059873,
            -5.227213049216741e-20, 5.450995098600449e-37, -3.906825737175952e-53,
            -8.67027066189249e-70, -1.218383942085089e-87, -1.7439391250698185e-104,
            -5.929901035847817e-121, 5.009996221269654e-138, -3.229919321942269e-155,
            -1.3118499568145792e-171, 1.0215204443549811e-187, 4.57211774401314e-204,
            1.663559838603158e-220, -8.901623381742715e-238, 3.4497981925119135e-254,
            -3.576186383934139e-270, 1.4785525151191119e-286, -8.498109169004278e-303,
            2.42917e-319,
        ],
    },
    FunctionValue {
        name: "atanh",
        arg: 0.6,
        limbs: &[
            8.786684394833195e29, -14583054255743.752, -0.000314059653461396,
            2.6302732780400807e-20, -1.2184119165401077e-36, -4.548571543553269e-53,
            3.669730757529049e-69, 2.2589582312188467e-85, -1.2021233728969224e-101,
            4.232441898907252e-121, -5.702020062799423e-138, -2.0175612620384118e-154,
            -4.812150761943966e-171, -1.4437197594883635e-187, -3.5244811397196036e-204,
            -3.1883746764296736e-220, -1.4365379820831203e-236, -1.0385993294145598e-252,
            4.711610209002675e-269, -1.2854448775343262e-285, 1.6901925897475858e-302,
            9.80775e-319,
        ],
    },
    FunctionValue {
        name: "acoth",
        arg: 1.5,
        limbs: &[
            1.0201024678635779e30, 58819505629360.23, 0.0030755778519858394,
            -1.546377839599372e-20, 1.0458304265378414e-36, -3.4830919932970586e-53,
            2.076442644894718e-70, -3.7481214629449355e-87, 3.468670675649204e-104,
            1.975089630691661e-120, -4.138509503532284e-138, -2.5663028501821316e-154,
            -8.362094160286722e-171, 8.386157508706428e-187, -1.4650079764736264e-203,
            -1.167060199933729e-219, 1.9336522531072139e-236, 6.420998351227092e-253,
            -4.183018046991098e-269, -2.291378315448148e-285, -1.5858470322211786e-301,
            -3.73805e-318,
        ],
    },
    FunctionValue {
        name: "acoth",
        arg: -8.0,
        limbs: &[
            -1.5928944292815244e29, -14510764334807.137, 0.0005983613668059873,
            5.227213049216741e-20, -5.450995098600449e-37, 3.906825737175952e-53,
            8.67027066189249e-70, 1.218383942085089e-87, 1.7439391250698185e-104,
            5.929901035847817e-121, -5.009996221269654e-138, 3.229919321942269e-155,
            1.3118499568145792e-171, -1.0215204443549811e-187, -4.57211774401314e-204,
            -1.663559838603158e-220, 8.901623381742715e-238, -3.4497981925119135e-254,
            3.576186383934139e-270, -1.4785525151191119e-286, 8.498109169004278e-303,
            -2.42917e-319,
        ],
    },
    FunctionValue {
        name: "acoshp1",
        arg: 1e-07,
        limbs: &[
            5.669105780414915e26, -7526746131.847477, -2.6734548529668488e-08,
            -2.7173338501821017e-26, 2.7968897982034995e-42, -1.3316174657503369e-58,
            6.624127044904585e-75, -5.581713257777992e-92, -1.3912147759348118e-108,
            1.1285700278734706e-125, -4.7362095334517675e-142, 1.0576892692426446e-158,
            -4.079366063919107e-175, -6.640384496662689e-192, -2.9356515852832106e-208,
            1.5441644546860175e-224, 8.737244761145505e-241, -2.5034543906845384e-257,
            1.5344692830889455e-273, -3.509488817390451e-291, -1.3426305430404744e-307,
        ],
    },
    FunctionValue {
        name: "acoshp1",
        arg: 2.0,
        limbs: &[
            2.2345475132212626e30, -57058117037637.71, 0.0007521197325850576,
            -5.1730390175993165e-20, -2.7312517520307483e-36, -6.4669146131850775e-53,
            -4.7402733385448386e-70, -1.6053225808519996e-86, -6.842251264808564e-104,
            5.536174907080015e-120, -2.5659197771202212e-136, 6.70098905943476e-153,
            -2.048935553293827e-169, -1.0000623133173699e-185, -6.198947048206762e-203,
            -5.277924490015117e-219, -1.4900096183919094e-235, 3.1345548359294516e-253,
            5.620077157467318e-270, 3.6816319874625167e-286, 1.689226303954072e-302,
            -6.27394e-319,
        ],
    },
];

pub const CONSTANTS: &[ConstantValue] = &[
    ConstantValue {
        name: "ln2",
        limbs: &[
            8.786684394833195e29, 29397410855296.246, 0.0007235380027886041,
            -4.541272342046329e-20, -1.714078701136839e-36, 7.708125348837292e-53,
            3.670485397452285e-69, 2.9807367770201048e-86, 5.653435716610655e-103,
            -3.89160274379732e-119, -2.554502869719609e-135, 2.0517360388271278e-152,
            -1.6599856781831136e-168, 8.44912992198855e-185, -3.716386623514959e-201,
            9.96347962869153e-218, 7.579108720378201e-234, -4.5582995935947107e-250,
            -1.7850779436293263e-267, 8.493104573013175e-284, 1.5701652496720733e-300,
            6.0738173e-317,
        ],
    },
    ConstantValue {
        name: "ln10",
        limbs: &[
            2.9188733752104757e30, -275176042951967.28, -0.012656556293239717,
            -5.100211492066525e-19, 2.445170645677929e-35, -6.607717639006171e-52,
            -3.3006287580442986e-68, 1.051822642737917e-84, -5.204985808174331e-101,
            -6.669728486799986e-118, -4.0397858126544516e-134, -1.5098507509655517e-150,
            1.1544157331854969e-166, 4.09068930265925e-183, -2.2277519452121153e-199,
            3.649691048840061e-216, 7.5866281912050596e-233, -3.672519160729813e-250,
            -1.3740903603189966e-266, -1.8864663471065494e-283, 4.986050317240713e-300,
            1.3615253e-316,
        ],
    },
    ConstantValue {
        name: "ln10r",
        limbs: &[
            5.505336606604651e29, 13922855638397.412, 0.0004712087021310217,
            9.804623724302019e-21, 1.1677408716376515e-37, 4.886431135495112e-54,
            1.5998790865680407e-70, -1.4527422905780117e-86, -7.286369544628122e-103,
            4.230443909499677e-119, -2.3726803817204886e-135, 3.309909728557022e-153,
            -2.4911580898283988e-169, -8.799028828879516e-186, 5.4251522828721415e-202,
            2.736337403996576e-218, 1.4132049100632754e-234, 4.341423702693138e-251,
            2.9517658360590233e-267, 9.031812860882621e-284, -1.613519289926896e-300,
            8.4633924e-317,
        ],
    },
    ConstantValue {
        name: "pid4",
        limbs: &[
            9.956104532489243e29, 38810606250168.055, -0.0009490804367087084,
            3.5255081520096807e-20, 1.797602068406201e-36, 5.530082060684587e-54,
            1.9107844907589622e-70, 6.0534231517812345e-87, 9.646751870950795e-104,
            -1.4940213159714904e-120, 3.174036014482614e-137, 1.9681557411809982e-153,
            -5.440798332756039e-170, -1.7416806063641129e-186, -5.542830755164614e-203,
            -1.1381949450177029e-219, 5.6047287971681155e-236, 3.0326612627152883e-252,
            1.8506902493094756e-268, -1.428561985321911e-286, 7.955071765181967e-303,
            -2.925e-319,
        ],
    },
    ConstantValue {
        name: "sqrt2",
        limbs: &[
            1.7927286711931566e30, -122547501713809.34, 0.005246394239222564,
            6.256549106189487e-20, 5.18393579787578e-37, 3.93674361128958e-54,
            -2.536695954713894e-70, 3.8847204804658045e-87, -1.8672322026225881e-103,
            1.90770927120161e-120, 1.1764498403965456e-136, 1.6534358813046916e-154,
            -1.4349968463131592e-170, -5.809509178193653e-187, 4.3597974535989485e-203,
            2.5489972745050226e-219, -6.842476971353525e-236, -2.4833655110212756e-252,
            9.470405785192513e-269, -4.443251021526417e-285, 2.289492276245197e-301,
            1.0748877e-317,
        ],
    },
    ConstantValue {
        name: "sqrt5",
        limbs: &[
            2.8345529138287315e30, -137720481969140.39, 0.006729513887211623,
            -8.379150178766084e-20, 1.6753571905431572e-36, -1.997697783333164e-53,
            -1.0320391772373646e-69, -6.3959171093034286e-86, 9.617363167984469e-105,
            -8.642628069548055e-122, 5.058073203130602e-138, -2.4220922011441374e-156,
            2.2905351734958473e-172, -5.744348765592647e-189, 3.538862231199921e-205,
            2.0736554314796398e-221, -4.737708979847321e-238, 2.57507527151177e-254,
            -4.0399203819704315e-271, 6.4090449969527706e-288, 2.2556888631963426e-304,
            -4.372e-321,
        ],
    },
    ConstantValue {
        name: "sqrt7",
        limbs: &[
            3.3538882375256533e30, -159304992792067.78, -0.0014335316013788274,
            -2.6239927484596784e-20, -6.792528293050831e-38, 3.584117580149328e-55,
            3.3580411299251285e-72, -1.8779044323494965e-88, 8.311056492767486e-105,
            1.1577491464962313e-121, 8.594243001364496e-138, 2.9030754087285604e-154,
            -1.770061612624809e-171, -1.0081344089958826e-188, 4.528765033625667e-205,
            1.130660232456192e-221, -6.504723904445953e-238, 4.6182403345676325e-254,
            -1.1550335746423986e-270, 7.071952975068605e-287, 5.7492102195432436e-303,
            -1.1429e-319,
        ],
    },
    ConstantValue {
        name: "ln2r",
        limbs: &[
            1.8288332345291844e30, 25803374975501.14, -0.0013455680064590593,
            -1.7540122331584968e-20, 1.2054803570807543e-36, -7.834784018067958e-53,
            3.9335223949900937e-69, 2.5199037144973868e-85, -1.3730050404902415e-101,
            -4.061526017380301e-118, -3.7475100230572656e-134, 2.3424581763885864e-150,
            -1.0739806632942722e-167, -3.3970652036329295e-184, -6.368773938192127e-201,
            2.130969010349418e-217, -1.9543146343771466e-234, 5.6022489143762825e-251,
            -2.6164619622655516e-268, -7.719741531231338e-285, 6.6241202651146065e-301,
            -3.0905234e-317,
        ],
    },
    ConstantValue {
        name: "pi",
        limbs: &[
            3.982441812995697e30, 155242425000672.22, -0.0037963217468348336,
            1.4102032608038723e-19, 7.190408273624804e-36, 2.2120328242738347e-53,
            7.643137963035849e-70, 2.4213692607124938e-86, 3.858700748380318e-103,
            -5.9760852638859615e-120, 1.2696144057930455e-136, 7.872622964723993e-153,
            -2.1763193331024156e-169, -6.9667224254564516e-186, -2.2171323020658456e-202,
            -4.5527797800708114e-219, 2.2418915188672462e-235, 1.2130645050861153e-251,
            7.402760997237902e-268, -5.714247941287644e-286, 3.182028706072787e-302,
            -1.17001e-318,
        ],
    },
    ConstantValue {
        name: "pid2",
        limbs: &[
            1.9912209064978486e30, 77621212500336.11, -0.0018981608734174168,
            7.051016304019361e-20, 3.595204136812402e-36, 1.1060164121369174e-53,
            3.8215689815179243e-70, 1.2106846303562469e-86, 1.929350374190159e-103,
            -2.9880426319429807e-120, 6.348072028965228e-137, 3.9363114823619964e-153,
            -1.0881596665512078e-169, -3.4833612127282258e-186, -1.1085661510329228e-202,
            -2.2763898900354057e-219, 1.1209457594336231e-235, 6.065322525430577e-252,
            3.701380498618951e-268, -2.857123970643822e-286, 1.5910143530363935e-302,
            -5.85003e-319,
        ],
    },
    ConstantValue {
        name: "pi2",
        limbs: &[
            7.964883625991394e30, 310484850001344.44, -0.007592643493669667,
            2.8204065216077446e-19, 1.4380816547249608e-35, 4.424065648547669e-53,
            1.5286275926071697e-69, 4.8427385214249876e-86, 7.717401496760636e-103,
            -1.1952170527771923e-119, 2.539228811586091e-136, 1.5745245929447986e-152,
            -4.352638666204831e-169, -1.3933444850912903e-185, -4.434264604131691e-202,
            -9.105559560141623e-219, 4.4837830377344924e-235, 2.4261290101722307e-251,
            1.4805521994475805e-267, -1.1428495882575288e-285, 6.364057412145574e-302,
            -2.34002e-318,
        ],
    },
    ConstantValue {
        name: "pid3",
        limbs: &[
            1.3274806043318993e30, -135902509473546.6, -0.0012654405822782777,
            -9.755351430460485e-20, 2.3968027578749348e-36, -1.0399175350626203e-52,
            -1.2907312973518973e-69, 5.096754411460855e-86, 2.5098470901174168e-102,
            1.4531030415395104e-119, 2.716239846647248e-136, 2.624207654907998e-153,
            -2.4919297201601323e-169, 7.483748225950079e-186, 7.426082003250512e-202,
            2.8699443405180123e-218, 9.134209633368683e-235, -4.251316824504325e-251,
            -3.9934553403061783e-268, 1.7742519989283103e-284, 7.883264444395916e-301,
            5.8324074e-317,
        ],
    },
    ConstantValue {
        name: "pir",
        limbs: &[
            4.0350571827946165e29, -24945686298992.336, -0.0013591035139318033,
            1.0209105145523442e-19, -1.9778855567000564e-36, 3.5963424127307185e-53,
            -1.9868917920778338e-69, -4.837668158126863e-86, 1.6175359548302777e-102,
            -1.4661158722699456e-119, -4.998951007899034e-136, 3.4316117285940982e-152,
            7.911600656418699e-169, -8.510815563975154e-187, -2.6817556991752934e-203,
            6.955218096151461e-220, 2.984168304590755e-237, -1.3675997367713133e-253,
            -1.1890729774972155e-270, -6.944611543592818e-288, -3.680662328322917e-304,
            5.04e-322,
        ],
    },
    ConstantValue {
        name: "pi2r",
        limbs: &[
            2.0175285913973083e29, -12472843149496.168, -0.0006795517569659017,
            5.104552572761721e-20, -9.889427783500282e-37, 1.7981712063653593e-53,
            -9.934458960389169e-70, -2.4188340790634316e-86, 8.087679774151388e-103,
            -7.330579361349728e-120, -2.499475503949517e-136, 1.7158058642970491e-152,
            3.9558003282093497e-169, -4.255407781987577e-187, -1.3408778495876467e-203,
            3.4776090480757306e-220, 1.4920841522953775e-237, -6.837998683856566e-254,
            -5.945364887486077e-271, -3.472305771796409e-288, -1.8403311641614586e-304,
            2.5e-322,
        ],
    },
    ConstantValue {
        name: "sqrt_pi",
        limbs: &[
            2.246852187977214e30, -97185529782058.14, -0.0016553406084038264,
            -3.309853728967845e-20, -2.0728961436672053e-36, -1.6731833967386204e-54,
            1.30956388972008e-70, -2.4731624046876523e-87, 1.4182935740048714e-103,
            -1.182825379526999e-119, -2.4882014427089116e-136, 5.247617368196893e-153,
            -3.870405593708683e-169, 6.761462445901795e-187, 3.681745018339166e-203,
            1.3627807318849851e-219, 6.726593356426246e-236, 1.3942851879961937e-252,
            1.115320049181831e-268, 4.776327036240393e-285, -3.7183055698978376e-301,
            -3.65859e-318,
        ],
    },
    ConstantValue {
        name: "sqrt_2pi",
        limbs: &[
            3.177528836885039e30, -232342354135601.72, -0.009311321745149394,
            7.453948437461591e-20, 2.1568338123149997e-36, 3.3593583018559304e-53,
            1.1350036204696555e-69, 6.094668719582202e-87, -1.0854922349722262e-103,
            -2.188091330285434e-120, -1.1849377913804227e-137, -9.85587022940904e-154,
            -2.623165723399493e-170, -1.688107839599443e-186, 7.602359018392095e-204,
            2.0087565448585653e-220, -4.928555668811688e-237, 1.3034793387533757e-253,
            -8.448938663045223e-271, 5.114267027094908e-287, 2.6902595775062913e-303,
            -4.5e-321,
        ],
    },
    ConstantValue {
        name: "sqrt_pir",
        limbs: &[
            7.15195264226828e29, 9720002291702.75, -0.00030206114697485894,
            -1.2725910539911645e-20, -7.146823935685272e-37, 1.8903879057257943e-53,
            -5.776519764159545e-70, -8.404707563079798e-87, -6.828747952174608e-103,
            -7.689087820572348e-120, 3.700793574939249e-136, -6.176491418088928e-154,
            4.92453837818338e-170, -1.3336200581255288e-186, -6.498712622324665e-203,
            5.075778493545133e-219, 2.6645968549124066e-235, -3.095991189896232e-252,
            -1.5557162962427918e-268, 1.2176357665357715e-284, -2.6594151459381357e-301,
            1.001429e-317,
        ],
    },
    ConstantValue {
        name: "sqrt_2pir",
        limbs: &[
            5.0571942120729476e29, -31594000739325.082, -0.00043416087995513914,
            3.904646456513021e-21, -3.7571938074387537e-37, -1.2833266500913755e-53,
            -9.212488395554535e-71, -2.62923476337126e-87, 3.340663821845751e-104,
            -2.7834637900229535e-120, 1.1010794988290656e-136, -1.9123250912686917e-153,
            7.128284146453715e-170, -2.1658754803598313e-186, 8.966641800490729e-203,
            -3.6766354357680526e-219, 2.6244882476610507e-235, 1.294295418646761e-251,
            -6.138519130649693e-268, -4.9949095110565364e-284, -8.787263897915401e-301,
            -1.215e-317,
        ],
    },
    ConstantValue {
        name: "pip2",
        limbs: &[
            1.25112099430561e31, 794220561226112.5, 0.04728359178117447,
            -1.6905436289195423e-18, 1.750834701384383e-36, -9.819470856147326e-53,
            -5.075918288487032e-69, 5.146012388831822e-85, 1.632847072054833e-101,
            -6.465247605444512e-118, -1.3074772307771867e-134, 6.938396450190909e-151,
            5.7644143031515525e-167, 2.7028821760155093e-183, -1.7699352696912036e-199,
            6.839663529800887e-216, -5.8537639025162575e-233, -1.4838834529107407e-249,
            1.9191699485918897e-266, 5.49958514162789e-283, -3.101356542621243e-299,
            -1.69448641e-315,
        ],
    },
    ConstantValue {
        name: "sqrt2r",
        limbs: &[
            8.963643355965783e29, -61273750856904.67, 0.002623197119611282,
            3.1282745530947434e-20, 2.59196789893789e-37, 1.96837180564479e-54,
            -1.268347977356947e-70, 1.9423602402329023e-87, -9.336161013112941e-104,
            9.53854635600805e-121, 5.882249201982728e-137, 8.267179406523458e-155,
            -7.174984231565796e-171, -2.9047545890968265e-187, 2.1798987267994743e-203,
            1.2744986372525113e-219, -3.4212384856767625e-236, -1.2416827555106378e-252,
            4.7352028925962564e-269, -2.2216255107632084e-285, 1.1447461381225985e-301,
            5.37444e-318,
        ],
    },
    ConstantValue {
        name: "sqrt3",
        limbs: &[
            2.1956352458404766e30, 127209805371143.55, -0.0018963472998503766,
            6.726341143511946e-20, 3.405677512303475e-36, -3.1419925052491065e-53,
            -9.866912292462789e-70, -6.497211466355937e-87, 1.828047863610758e-103,
            1.0153804212684038e-119, 3.0506885950239707e-136, -4.977610010449177e-153,
            -1.7675559575691658e-169, 1.4467690255317458e-185, -6.8491530761455635e-202,
            3.0694221837632374e-218, -1.1639245999839963e-234, -6.4795079238276884e-251,
            -3.3668098556648263e-267, 8.732882121250681e-285, -6.090291788427764e-302,
            -2.057013e-318,
        ],
    },
    ConstantValue {
        name: "sqrt3d2",
        limbs: &[
            1.0978176229202383e30, 63604902685571.77, -0.0009481736499251883,
            3.363170571755973e-20, 1.7028387561517377e-36, -1.5709962526245532e-53,
            -4.9334561462313944e-70, -3.2486057331779686e-87, 9.14023931805379e-104,
            5.076902106342019e-120, 1.5253442975119854e-136, -2.488805005224588e-153,
            -8.837779787845829e-170, 7.233845127658729e-186, -3.4245765380727817e-202,
            1.5347110918816187e-218, -5.819622999919981e-235, -3.2397539619138442e-251,
            -1.6834049278324131e-267, 4.3664410606253405e-285, -3.045145894213882e-302,
            -1.028506e-318,
        ],
    },
    ConstantValue {
        name: "sqrt3r",
        limbs: &[
            7.318784152801589e29, 42403268457047.85, -0.0032362824332834586,
            -1.9441929735206107e-19, 9.159933939047974e-36, 2.1225708415685263e-52,
            -1.7329425267066108e-68, 7.699679012647524e-85, -4.101517444541973e-101,
            -6.079685755533177e-118, -1.411512765740651e-134, -9.945135214741879e-151,
            1.6899384915690566e-167, 9.167795436209466e-184, -3.724354344039556e-200,
            -2.7395189292543283e-216, -1.5638454663034191e-232, 6.682568829981472e-249,
            -1.3551195061110623e-265, -9.752638276131607e-282, -2.892075875594922e-298,
            1.562071238e-314,
        ],
    },
    ConstantValue {
        name: "ln_pi",
        limbs: &[
            1.4511175268961846e30, 13013639153320.266, -0.00017395478165217428,
            1.3372224037482236e-20, 5.142164951290506e-37, -3.8582593233974026e-53,
            5.8112507770487e-70, -4.98240301551176e-86, 1.540819161748806e-102,
            8.451325809534413e-119, 3.4604285458202755e-135, 2.616107325207208e-151,
            -4.1300615522986207e-168, 3.7052113979217216e-185, 1.8718450420757672e-201,
            -8.407448885399235e-218, 9.352067720000088e-235, -4.004210325499621e-251,
            1.5211488268539935e-267, 2.793244087771008e-284, -8.759291997460538e-301,
            7.577976e-317,
        ],
    },
    ConstantValue {
        name: "ln_2pi",
        limbs: &[
            2.3297859663795043e30, -98326438346711.48, -0.0033566667788635703,
            1.305898264898446e-19, 1.809403332097268e-36, -1.2854913412636333e-52,
            -3.8489721320212194e-70, -2.0016662384916547e-86, -1.4656728643472376e-102,
            -5.354112236277162e-119, -4.5973584312182926e-135, 2.8212809290899207e-151,
            6.92868035522542e-168, -1.1380032362735081e-184, -1.8445415814391916e-201,
            1.5560307432922956e-218, 9.660942780065686e-235, 6.2808536529496384e-251,
            -2.639291167753326e-268, 5.265517083885671e-285, -5.237484487655544e-302,
            1.82094e-318,
        ],
    },
    ConstantValue {
        name: "e",
        limbs: &[
            3.4458315914355974e30, 183257515001865.8, -0.002697201869120467,
            1.9212894818467287e-19, -1.1834001808221683e-35, -2.5630026662192966e-52,
            1.1007657337884914e-68, -9.0559481522056e-85, -5.4506576614291256e-101,
            -6.453873296632304e-119, -3.3531221294135867e-136, -1.316534759419016e-152,
            -8.367113910742326e-169, -4.500158598926896e-185, -3.7444067777958137e-202,
            2.0204745013567237e-218, 1.1971198096661843e-234, -6.784114270834086e-251,
            3.270639861161509e-268, 1.562809530857877e-284, -4.933613978333378e-301,
            9.490186e-318,
        ],
    },
    ConstantValue {
        name: "er",
        limbs: &[
            4.663425944126045e29, -15755317053398.979, -0.000739045985481986,
            -3.5833919087545245e-20, -2.2266378040246507e-36, 4.8755750505320776e-55,
            -3.298952611792049e-71, -6.390003682779506e-88, 3.167880169090597e-104,
            -2.07312688255394e-120, -2.869472444190212e-137, 1.603778926802642e-153,
            6.5466645313414914e-170, 2.4978572887118968e-186, -7.764309010788024e-203,
            3.518553027760468e-219, 4.850820770556941e-236, 3.898714105460687e-252,
            -8.497665106134535e-269, 4.95860890928922e-285, -2.958275541795027e-301,
            -1.6437846e-317,
        ],
    },
    ConstantValue {
        name: "ep2",
        limbs: &[
            9.366741398929498e30, -227811257712210.38, 0.010481480956168599,
            -6.622673349091693e-19, 1.7670809633130904e-35, 4.681689958561081e-52,
            -2.138807693042335e-68, -1.8244862371450115e-84, 1.935432810829826e-101,
            -4.275152355534385e-118, 2.329691875510086e-134, 2.2281710529330544e-150,
            7.423359810236244e-167, -1.9004270205137367e-183, -8.371661261209915e-200,
            3.16200977459663e-216, -3.1991749830166762e-232, -5.283073288340525e-249,
            -8.697650414223724e-266, 1.8268988560935053e-282, 7.616779109277805e-299,
            1.367634315e-315,
        ],
    },
    ConstantValue {
        name: "ep2r",
        limbs: &[
            1.7155785302694952e29, -13213754368986.373, -0.0006915184077578039,
            8.613100042006128e-21, 6.459149962943953e-37, -3.4991573690515324e-53,
            -9.630926617483929e-70, 6.647130378796454e-87, -1.4247685640373444e-103,
            -1.4968638705002509e-120, -2.5278732655449905e-137, 1.3908996029731698e-153,
            3.309202084350295e-171, 2.2674576840587743e-187, -5.6240101651137595e-204,
            -1.3195926615254426e-220, 8.415590246885618e-237, 3.3542683919229312e-254,
            1.8481101324272566e-270, 4.4521708608296273e-287, 8.600507005253825e-304,
            5.666e-320,
        ],
    },
    ConstantValue {
        name: "ep_pi",
        limbs: &[
            2.933431290563961e31, -1709901834749524.5, -0.03679161527398765,
            1.8925209516928536e-18, 1.3637535601947424e-34, -7.489836103077613e-51,
            -3.256246825079676e-67, 2.6218083583332607e-83, 1.5332183825654253e-99,
            9.687879596308294e-116, 5.9007541469319795e-133, 1.2293221458395508e-149,
            1.3468775619270225e-166, 5.185599757074873e-183, -2.1272518970047134e-200,
            7.450226865620944e-217, 1.7630175775813185e-233, 5.474386498131243e-251,
            -1.2100329515545653e-267, -1.033963880291421e-283, 1.4400380746216935e-300,
            -1.1918133e-317,
        ],
    },
    ConstantValue {
        name: "ep_2pi",
        limbs: &[
            6.788163185431763e32, 1.6039341932039522e16, 0.6601635658556099,
            -2.758181380365002e-17, 1.3440219954796188e-33, -8.346996763857848e-50,
            -1.6421828912094932e-66, -8.260297364458587e-84, 3.0098853279292046e-101,
            1.5850029218250173e-117, -6.515240812388335e-134, 2.4288215494347087e-150,
            5.3476413723307906e-167, -2.9178479141075195e-183, 9.563318633256972e-200,
            -3.932680333811753e-216, -6.322106890179932e-233, 3.5073866428976556e-249,
            1.0111065346029941e-265, -6.3152846605443324e-282, 2.4141525501017127e-298,
            -5.8270669e-315,
        ],
    },
    ConstantValue {
        name: "ep_pid2",
        limbs: &[
            6.098004539365049e30, 349943859051379.75, -0.0309566996877486,
            -1.6535876003013525e-18, -7.763945116736342e-36, -1.5969606127720795e-53,
            -9.37158679088007e-70, -5.7173738359980486e-86, -2.6203560179954095e-102,
            3.488438388704751e-119, 1.575698262229236e-135, 9.206397158346762e-152,
            7.324374227668274e-168, 1.5442918992797652e-184, -1.2744230723265581e-200,
            -4.173749344534749e-217, -8.562744526868187e-234, -1.9611294768603573e-250,
            3.626624800971606e-267, -2.8526341251035254e-284, 2.849306516330011e-300,
            1.27776744e-316,
        ],
    },
    ConstantValue {
        name: "ep_pid4",
        limbs: &[
            2.7803127727866465e30, 273188647570106.7, -0.013482060490773875,
            2.9482015850147917e-19, 1.864915816330676e-35, 2.289528323883063e-52,
            -1.6515248644727042e-68, -8.403418743336964e-85, 2.4051749043473387e-101,
            -5.311562001056561e-119, -1.9437702904493588e-135, 1.2191241453671382e-151,
            -2.8518625169561544e-168, 2.0515753575096657e-184, 1.2450099951416272e-200,
            -5.683212881411782e-217, 1.0739452408050572e-233, -4.940837569350875e-250,
            2.5942547101854377e-266, -5.359318451774918e-283, 6.376519624269864e-300,
            4.9688391e-316,
        ],
    },
    ConstantValue {
        name: "euler_gamma",
        limbs: &[
            7.317077840735647e29, -6265889359855.917, -0.00029436263419041925,
            2.1556331821319957e-20, -5.435549309365862e-37, -2.4811414180603335e-53,
            9.111143155277889e-70, 3.422555257392331e-86, -2.663369334317941e-102,
            7.241542162365249e-119, -4.426126203168189e-135, -2.385676431147425e-151,
            -5.012341609037984e-168, -2.330842559293134e-184, 1.291950194858938e-200,
            -8.621393134429672e-218, -1.027600969960085e-234, -5.713497824410865e-252,
            1.152569716647684e-268, 2.9657580881942625e-285, 1.4726865503229003e-302,
            -2.43505e-319,
        ],
    },
    ConstantValue {
        name: "catalan",
        limbs: &[
            1.1611243352471585e30, 4750594682423.825, -0.0002891784713345666,
            5.968909568040323e-21, 2.6518420851385846e-37, 3.615113192432948e-54,
            1.657401303675623e-70, -2.439833159647054e-87, -6.3717407581101015e-105,
            -1.3497010812912217e-121, 7.037167996655757e-138, -3.341328137934388e-154,
            -2.4659818345373934e-170, 1.1484886405554468e-186, -1.1382429686446248e-203,
            5.870860337761276e-220, 1.0906940323886732e-237, 3.1197568692364404e-254,
            -7.473531272917935e-271, -3.863626728134086e-287, 5.96146283602704e-304,
            1.366e-320,
        ],
    },
];
