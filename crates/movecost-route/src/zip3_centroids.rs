//! ZIP3 population centroids
//!
//! Approximate latitude/longitude of the main city served by each three digit
//! ZIP prefix. Prefixes that are unassigned or reserved are absent.

/// `(zip3, latitude, longitude)`
pub(crate) const ZIP3_CENTROIDS: &[(&str, f64, f64)] = &[
    ("005", 40.8123, -73.0447),
    ("006", 18.4037, -66.0636),
    ("007", 18.4037, -66.0636),
    ("008", 18.4037, -66.0636),
    ("009", 18.4037, -66.0636),
    ("010", 42.1155, -72.5395),
    ("011", 42.1155, -72.5395),
    ("012", 42.4517, -73.2605),
    ("013", 42.1155, -72.5395),
    ("014", 42.5912, -71.8156),
    ("015", 42.2705, -71.8079),
    ("016", 42.2705, -71.8079),
    ("017", 42.3085, -71.4368),
    ("018", 42.4869, -71.1543),
    ("019", 42.4779, -70.9663),
    ("020", 42.0821, -71.0242),
    ("021", 42.3188, -71.0846),
    ("022", 42.3188, -71.0846),
    ("023", 42.0821, -71.0242),
    ("024", 42.4473, -71.2272),
    ("025", 41.6688, -70.2962),
    ("026", 41.6688, -70.2962),
    ("027", 41.8230, -71.4187),
    ("028", 41.8230, -71.4187),
    ("029", 41.8230, -71.4187),
    ("030", 42.9848, -71.4447),
    ("031", 42.9848, -71.4447),
    ("032", 42.9848, -71.4447),
    ("033", 43.2305, -71.5595),
    ("034", 42.9848, -71.4447),
    ("035", 44.3062, -71.7701),
    ("036", 43.1344, -72.4550),
    ("037", 43.6496, -72.3239),
    ("038", 43.0580, -70.7826),
    ("039", 43.0580, -70.7826),
    ("040", 43.6773, -70.2715),
    ("041", 43.6773, -70.2715),
    ("042", 43.6773, -70.2715),
    ("043", 43.6773, -70.2715),
    ("044", 44.8322, -68.7906),
    ("045", 43.6773, -70.2715),
    ("046", 44.8322, -68.7906),
    ("047", 44.8322, -68.7906),
    ("048", 43.6773, -70.2715),
    ("049", 44.8322, -68.7906),
    ("050", 43.6496, -72.3239),
    ("051", 43.1344, -72.4550),
    ("052", 42.8781, -73.1968),
    ("053", 42.8509, -72.5579),
    ("054", 44.4877, -73.2314),
    ("055", 42.6583, -71.1368),
    ("056", 44.4877, -73.2314),
    ("057", 43.6091, -72.9781),
    ("058", 44.4193, -72.0151),
    ("059", 44.4193, -72.0151),
    ("060", 41.7661, -72.6834),
    ("061", 41.7661, -72.6834),
    ("062", 41.7661, -72.6834),
    ("063", 41.3502, -72.1023),
    ("064", 41.3112, -72.9246),
    ("065", 41.3112, -72.9246),
    ("066", 41.1918, -73.1953),
    ("067", 41.5583, -73.0361),
    ("068", 41.1035, -73.5583),
    ("069", 41.1035, -73.5583),
    ("070", 40.7245, -74.1725),
    ("071", 40.7245, -74.1725),
    ("072", 40.6657, -74.1912),
    ("073", 40.7161, -74.0683),
    ("074", 40.9147, -74.1624),
    ("075", 40.9147, -74.1624),
    ("076", 40.8890, -74.0461),
    ("077", 40.3481, -74.0672),
    ("078", 40.8859, -74.5597),
    ("079", 40.7154, -74.3647),
    ("080", 39.9268, -75.0246),
    ("081", 39.9362, -75.1073),
    ("082", 39.3797, -74.4527),
    ("083", 39.4286, -75.2281),
    ("084", 39.3797, -74.4527),
    ("085", 40.2236, -74.7641),
    ("086", 40.2236, -74.7641),
    ("087", 40.0821, -74.2097),
    ("088", 40.4870, -74.4450),
    ("089", 40.4870, -74.4450),
    ("100", 40.6943, -73.9249),
    ("101", 40.6943, -73.9249),
    ("102", 40.6943, -73.9249),
    ("103", 40.5834, -74.1496),
    ("104", 40.8501, -73.8662),
    ("105", 41.0220, -73.7549),
    ("106", 41.0220, -73.7549),
    ("107", 40.9466, -73.8674),
    ("108", 40.9305, -73.7836),
    ("109", 41.1138, -74.1421),
    ("110", 40.7498, -73.7976),
    ("111", 40.7128, -74.0060),
    ("112", 40.6501, -73.9496),
    ("113", 40.7675, -73.8331),
    ("114", 40.7027, -73.7890),
    ("115", 40.7469, -73.6392),
    ("116", 40.5999, -73.7448),
    ("117", 40.6696, -73.4156),
    ("118", 40.7637, -73.5245),
    ("119", 40.9170, -72.6620),
    ("120", 42.6664, -73.7987),
    ("121", 42.6664, -73.7987),
    ("122", 42.6664, -73.7987),
    ("123", 42.8025, -73.9276),
    ("124", 41.9295, -73.9968),
    ("125", 41.6949, -73.9210),
    ("126", 41.6949, -73.9210),
    ("127", 41.6523, -74.6876),
    ("128", 43.3109, -73.6459),
    ("129", 44.6951, -73.4563),
    ("130", 43.0409, -76.1438),
    ("131", 43.0409, -76.1438),
    ("132", 43.0409, -76.1438),
    ("133", 43.0961, -75.2260),
    ("134", 43.0961, -75.2260),
    ("135", 43.0961, -75.2260),
    ("136", 43.9734, -75.9095),
    ("137", 42.1014, -75.9093),
    ("138", 42.1014, -75.9093),
    ("139", 42.1014, -75.9093),
    ("140", 42.9017, -78.8487),
    ("141", 42.9017, -78.8487),
    ("142", 42.9017, -78.8487),
    ("143", 43.0921, -79.0147),
    ("144", 43.1680, -77.6162),
    ("145", 43.1680, -77.6162),
    ("146", 43.1680, -77.6162),
    ("147", 42.0975, -79.2366),
    ("148", 42.0938, -76.8097),
    ("149", 42.0938, -76.8097),
    ("150", 40.4396, -79.9763),
    ("151", 40.4396, -79.9763),
    ("152", 40.4396, -79.9763),
    ("153", 40.4396, -79.9763),
    ("154", 40.4396, -79.9763),
    ("155", 40.3258, -78.9194),
    ("156", 40.3113, -79.5444),
    ("157", 40.3258, -78.9194),
    ("158", 41.1225, -78.7564),
    ("159", 40.3258, -78.9194),
    ("160", 40.9956, -80.3458),
    ("161", 40.9956, -80.3458),
    ("162", 40.9956, -80.3458),
    ("163", 41.4282, -79.7035),
    ("164", 42.1168, -80.0733),
    ("165", 42.1168, -80.0733),
    ("166", 40.5082, -78.4007),
    ("167", 41.9604, -78.6413),
    ("168", 40.5082, -78.4007),
    ("169", 41.2398, -77.0371),
    ("170", 40.2752, -76.8843),
    ("171", 40.2752, -76.8843),
    ("172", 40.2752, -76.8843),
    ("173", 40.0420, -76.3012),
    ("174", 39.9651, -76.7315),
    ("175", 40.0420, -76.3012),
    ("176", 40.0420, -76.3012),
    ("177", 41.2398, -77.0371),
    ("178", 40.2752, -76.8843),
    ("179", 40.3400, -75.9267),
    ("180", 40.6520, -75.5742),
    ("181", 40.5961, -75.4755),
    ("182", 40.9504, -75.9724),
    ("183", 41.0023, -75.1779),
    ("184", 41.4044, -75.6649),
    ("185", 41.4044, -75.6649),
    ("186", 41.2468, -75.8759),
    ("187", 41.2468, -75.8759),
    ("188", 41.4044, -75.6649),
    ("189", 40.3139, -75.1280),
    ("190", 40.0077, -75.1339),
    ("191", 40.0077, -75.1339),
    ("192", 40.0077, -75.1339),
    ("193", 40.0420, -75.4912),
    ("194", 40.1224, -75.3398),
    ("195", 40.3400, -75.9267),
    ("196", 40.3400, -75.9267),
    ("197", 39.7415, -75.5413),
    ("198", 39.7415, -75.5413),
    ("199", 39.7415, -75.5413),
    ("200", 38.9047, -77.0163),
    ("201", 38.9625, -77.4380),
    ("202", 38.9047, -77.0163),
    ("203", 38.9047, -77.0163),
    ("204", 38.9047, -77.0163),
    ("205", 38.9047, -77.0163),
    ("206", 38.6085, -76.9195),
    ("207", 38.9784, -76.4922),
    ("208", 38.9866, -77.1188),
    ("209", 39.0028, -77.0207),
    ("210", 39.2088, -76.6625),
    ("211", 39.2088, -76.6625),
    ("212", 39.3051, -76.6144),
    ("214", 38.9706, -76.5047),
    ("215", 39.6515, -78.7585),
    ("216", 38.7760, -76.0702),
    ("217", 39.4336, -77.4157),
    ("218", 38.3755, -75.5867),
    ("219", 39.3051, -76.6144),
    ("220", 38.9047, -77.0163),
    ("221", 38.9047, -77.0163),
    ("222", 38.8786, -77.1011),
    ("223", 38.8185, -77.0861),
    ("224", 37.5295, -77.4756),
    ("225", 37.5295, -77.4756),
    ("226", 39.1735, -78.1746),
    ("227", 38.4705, -78.0001),
    ("228", 38.4362, -78.8735),
    ("229", 38.0375, -78.4855),
    ("230", 37.5295, -77.4756),
    ("231", 37.5295, -77.4756),
    ("232", 37.5295, -77.4756),
    ("233", 36.8945, -76.2590),
    ("234", 36.8945, -76.2590),
    ("235", 36.8945, -76.2590),
    ("236", 36.8945, -76.2590),
    ("237", 36.8468, -76.3540),
    ("238", 37.5295, -77.4756),
    ("239", 37.2959, -78.4002),
    ("240", 37.2785, -79.9580),
    ("241", 37.2785, -79.9580),
    ("242", 36.6179, -82.1607),
    ("243", 37.2785, -79.9580),
    ("244", 38.1593, -79.0611),
    ("245", 37.4003, -79.1909),
    ("246", 37.2608, -81.2143),
    ("247", 37.2608, -81.2143),
    ("248", 37.2608, -81.2143),
    ("249", 37.8096, -80.4327),
    ("250", 38.3484, -81.6323),
    ("251", 38.3484, -81.6323),
    ("252", 38.3484, -81.6323),
    ("253", 38.3484, -81.6323),
    ("254", 39.4582, -77.9776),
    ("255", 38.4109, -82.4344),
    ("256", 38.4109, -82.4344),
    ("257", 38.4109, -82.4344),
    ("258", 37.7877, -81.1840),
    ("259", 37.7877, -81.1840),
    ("260", 40.0751, -80.6951),
    ("261", 39.2624, -81.5419),
    ("262", 39.2863, -80.3230),
    ("263", 39.2863, -80.3230),
    ("264", 39.2863, -80.3230),
    ("265", 39.2863, -80.3230),
    ("266", 38.6702, -80.7717),
    ("267", 39.6515, -78.7585),
    ("268", 38.9957, -79.1276),
    ("270", 36.0956, -79.8268),
    ("271", 36.1029, -80.2610),
    ("272", 36.0956, -79.8268),
    ("273", 36.0956, -79.8268),
    ("274", 36.0956, -79.8268),
    ("275", 35.8324, -78.6438),
    ("276", 35.8324, -78.6438),
    ("277", 35.9795, -78.9032),
    ("278", 35.9676, -77.8047),
    ("279", 35.9676, -77.8047),
    ("280", 35.2079, -80.8304),
    ("281", 35.2079, -80.8304),
    ("282", 35.2079, -80.8304),
    ("283", 35.0846, -78.9776),
    ("284", 35.0846, -78.9776),
    ("285", 35.2748, -77.5937),
    ("286", 35.7426, -81.3230),
    ("287", 35.5704, -82.5537),
    ("288", 35.5704, -82.5537),
    ("289", 35.5704, -82.5537),
    ("290", 34.0376, -80.9037),
    ("291", 34.0376, -80.9037),
    ("292", 34.0376, -80.9037),
    ("293", 34.8362, -82.3649),
    ("294", 32.8151, -79.9630),
    ("295", 34.1782, -79.7872),
    ("296", 34.8362, -82.3649),
    ("297", 35.2079, -80.8304),
    ("298", 33.3645, -82.0708),
    ("299", 32.0281, -81.1785),
    ("300", 33.7627, -84.4225),
    ("301", 33.7627, -84.4225),
    ("302", 33.7627, -84.4225),
    ("303", 33.7627, -84.4225),
    ("304", 32.5866, -82.3345),
    ("305", 33.9508, -83.3689),
    ("306", 33.9508, -83.3689),
    ("307", 35.0657, -85.2487),
    ("308", 33.3645, -82.0708),
    ("309", 33.3645, -82.0708),
    ("310", 32.8065, -83.6974),
    ("311", 33.7627, -84.4225),
    ("312", 32.8065, -83.6974),
    ("313", 32.0281, -81.1785),
    ("314", 32.0281, -81.1785),
    ("315", 31.2108, -82.3579),
    ("316", 30.8502, -83.2788),
    ("317", 31.5776, -84.1762),
    ("318", 32.5100, -84.8771),
    ("319", 32.5100, -84.8771),
    ("320", 30.3322, -81.6749),
    ("321", 29.1994, -81.0982),
    ("322", 30.3322, -81.6749),
    ("323", 30.4551, -84.2527),
    ("324", 30.1995, -85.6003),
    ("325", 30.4427, -87.1886),
    ("326", 29.6804, -82.3458),
    ("327", 28.4772, -81.3369),
    ("328", 28.4772, -81.3369),
    ("329", 28.4772, -81.3369),
    ("330", 25.7839, -80.2102),
    ("331", 25.7839, -80.2102),
    ("332", 25.7839, -80.2102),
    ("333", 26.1412, -80.1464),
    ("334", 26.7469, -80.1316),
    ("335", 27.9942, -82.4451),
    ("336", 27.9942, -82.4451),
    ("337", 27.7930, -82.6652),
    ("338", 28.0557, -81.9545),
    ("339", 26.6195, -81.8303),
    ("341", 26.1505, -81.7936),
    ("342", 27.4900, -82.5740),
    ("344", 29.6804, -82.3458),
    ("346", 27.9942, -82.4451),
    ("347", 28.4772, -81.3369),
    ("349", 27.4256, -80.3430),
    ("350", 33.5277, -86.7987),
    ("351", 33.5277, -86.7987),
    ("352", 33.5277, -86.7987),
    ("354", 33.2348, -87.5266),
    ("355", 33.5277, -86.7987),
    ("356", 34.6988, -86.6412),
    ("357", 34.6988, -86.6412),
    ("358", 34.6988, -86.6412),
    ("359", 33.5277, -86.7987),
    ("360", 32.3473, -86.2666),
    ("361", 32.3473, -86.2666),
    ("362", 33.6713, -85.8136),
    ("363", 31.2335, -85.4068),
    ("364", 31.4342, -86.9723),
    ("365", 30.6782, -88.1163),
    ("366", 30.6782, -88.1163),
    ("367", 32.3473, -86.2666),
    ("368", 32.3473, -86.2666),
    ("369", 32.3846, -88.6897),
    ("370", 36.1715, -86.7843),
    ("371", 36.1715, -86.7843),
    ("372", 36.1715, -86.7843),
    ("373", 35.0657, -85.2487),
    ("374", 35.0657, -85.2487),
    ("375", 35.1046, -89.9773),
    ("376", 36.3406, -82.3803),
    ("377", 35.9692, -83.9496),
    ("378", 35.9692, -83.9496),
    ("379", 35.9692, -83.9496),
    ("380", 35.1046, -89.9773),
    ("381", 35.1046, -89.9773),
    ("382", 36.1371, -88.5077),
    ("383", 35.6536, -88.8353),
    ("384", 35.6236, -87.0487),
    ("385", 36.1484, -85.5114),
    ("386", 35.1046, -89.9773),
    ("387", 33.3850, -91.0514),
    ("388", 34.2691, -88.7318),
    ("389", 33.7816, -89.8130),
    ("390", 32.3163, -90.2124),
    ("391", 32.3163, -90.2124),
    ("392", 32.3163, -90.2124),
    ("393", 32.3846, -88.6897),
    ("394", 31.3074, -89.3170),
    ("395", 30.4271, -89.0703),
    ("396", 31.2449, -90.4714),
    ("397", 33.5088, -88.4097),
    ("398", 31.5776, -84.1762),
    ("399", 33.7627, -84.4225),
    ("400", 38.1663, -85.6485),
    ("401", 38.1663, -85.6485),
    ("402", 38.1663, -85.6485),
    ("403", 38.0423, -84.4587),
    ("404", 38.0423, -84.4587),
    ("405", 38.0423, -84.4587),
    ("406", 38.1924, -84.8643),
    ("407", 37.1209, -84.0804),
    ("408", 37.1209, -84.0804),
    ("409", 37.1209, -84.0804),
    ("410", 39.1412, -84.5060),
    ("411", 38.4593, -82.6449),
    ("412", 38.4593, -82.6449),
    ("413", 37.7353, -83.5473),
    ("414", 37.7353, -83.5473),
    ("415", 37.4807, -82.5262),
    ("416", 37.4807, -82.5262),
    ("417", 37.2583, -83.1976),
    ("418", 37.2583, -83.1976),
    ("420", 37.0711, -88.6435),
    ("421", 36.9715, -86.4375),
    ("422", 36.9715, -86.4375),
    ("423", 37.7573, -87.1174),
    ("424", 37.9881, -87.5341),
    ("425", 37.0816, -84.6089),
    ("426", 37.0816, -84.6089),
    ("427", 37.7030, -85.8769),
    ("430", 39.9860, -82.9851),
    ("431", 39.9860, -82.9851),
    ("432", 39.9860, -82.9851),
    ("433", 39.9860, -82.9851),
    ("434", 41.6639, -83.5822),
    ("435", 41.6639, -83.5822),
    ("436", 41.6639, -83.5822),
    ("437", 39.9567, -82.0133),
    ("438", 39.9567, -82.0133),
    ("439", 40.3653, -80.6520),
    ("440", 41.4767, -81.6805),
    ("441", 41.4767, -81.6805),
    ("442", 41.0798, -81.5219),
    ("443", 41.0798, -81.5219),
    ("444", 41.0993, -80.6463),
    ("445", 41.0993, -80.6463),
    ("446", 40.8076, -81.3678),
    ("447", 40.8076, -81.3678),
    ("448", 40.7656, -82.5275),
    ("449", 40.7656, -82.5275),
    ("450", 39.1412, -84.5060),
    ("451", 39.1412, -84.5060),
    ("452", 39.1412, -84.5060),
    ("453", 39.7797, -84.1998),
    ("454", 39.7797, -84.1998),
    ("455", 39.9297, -83.7957),
    ("456", 39.3393, -82.9937),
    ("457", 39.3269, -82.0987),
    ("458", 40.7410, -84.1121),
    ("459", 39.1412, -84.5060),
    ("460", 39.7771, -86.1458),
    ("461", 39.7771, -86.1458),
    ("462", 39.7771, -86.1458),
    ("463", 41.5906, -87.3472),
    ("464", 41.5906, -87.3472),
    ("465", 41.6771, -86.2692),
    ("466", 41.6771, -86.2692),
    ("467", 41.0885, -85.1436),
    ("468", 41.0885, -85.1436),
    ("469", 40.4640, -86.1277),
    ("470", 39.1412, -84.5060),
    ("471", 38.1663, -85.6485),
    ("472", 39.2094, -85.9183),
    ("473", 40.1989, -85.3950),
    ("474", 39.1637, -86.5257),
    ("475", 39.4654, -87.3763),
    ("476", 37.9881, -87.5341),
    ("477", 37.9881, -87.5341),
    ("478", 39.4654, -87.3763),
    ("479", 40.3990, -86.8593),
    ("480", 42.5084, -83.1539),
    ("481", 42.3834, -83.1024),
    ("482", 42.3834, -83.1024),
    ("483", 42.5084, -83.1539),
    ("484", 43.0235, -83.6922),
    ("485", 43.0235, -83.6922),
    ("486", 43.4199, -83.9501),
    ("487", 43.4199, -83.9501),
    ("488", 42.7142, -84.5601),
    ("489", 42.7142, -84.5601),
    ("490", 42.2749, -85.5882),
    ("491", 42.2749, -85.5882),
    ("492", 42.2431, -84.4037),
    ("493", 42.9615, -85.6557),
    ("494", 42.9615, -85.6557),
    ("495", 42.9615, -85.6557),
    ("496", 44.7547, -85.6035),
    ("497", 45.0214, -84.6803),
    ("498", 45.8275, -88.0599),
    ("499", 45.8275, -88.0599),
    ("500", 41.5725, -93.6105),
    ("501", 41.5725, -93.6105),
    ("502", 41.5725, -93.6105),
    ("503", 41.5725, -93.6105),
    ("504", 42.4920, -92.3522),
    ("505", 42.5098, -94.1751),
    ("506", 42.4920, -92.3522),
    ("507", 42.4920, -92.3522),
    ("508", 41.0597, -94.3650),
    ("509", 41.5725, -93.6105),
    ("510", 42.4959, -96.3901),
    ("511", 42.4959, -96.3901),
    ("512", 42.4959, -96.3901),
    ("513", 42.4959, -96.3901),
    ("514", 42.0699, -94.8647),
    ("515", 41.2628, -96.0498),
    ("516", 41.2628, -96.0498),
    ("520", 42.5007, -90.7067),
    ("521", 43.3016, -91.7846),
    ("522", 41.9667, -91.6781),
    ("523", 41.9667, -91.6781),
    ("524", 41.9667, -91.6781),
    ("525", 41.5725, -93.6105),
    ("526", 40.8072, -91.1247),
    ("527", 41.5563, -90.6052),
    ("528", 41.5563, -90.6052),
    ("530", 43.0642, -87.9673),
    ("531", 43.0642, -87.9673),
    ("532", 43.0642, -87.9673),
    ("534", 42.7274, -87.8135),
    ("535", 43.0827, -89.3923),
    ("537", 43.0827, -89.3923),
    ("538", 43.0827, -89.3923),
    ("539", 43.5489, -89.4658),
    ("540", 44.9477, -93.1040),
    ("541", 44.5150, -87.9896),
    ("542", 44.5150, -87.9896),
    ("543", 44.5150, -87.9896),
    ("544", 44.9615, -89.6457),
    ("545", 45.6360, -89.4256),
    ("546", 43.8241, -91.2268),
    ("547", 44.8200, -91.4951),
    ("548", 45.8271, -91.8860),
    ("549", 44.0228, -88.5617),
    ("550", 44.9477, -93.1040),
    ("551", 44.9477, -93.1040),
    ("553", 44.9635, -93.2678),
    ("554", 44.9635, -93.2678),
    ("555", 44.9635, -93.2678),
    ("556", 46.7757, -92.1392),
    ("557", 46.7757, -92.1392),
    ("558", 46.7757, -92.1392),
    ("559", 44.0151, -92.4778),
    ("560", 44.1711, -93.9773),
    ("561", 44.1711, -93.9773),
    ("562", 45.1220, -95.0569),
    ("563", 45.5339, -94.1718),
    ("564", 46.3553, -94.1983),
    ("565", 46.8060, -95.8449),
    ("566", 47.4830, -94.8788),
    ("567", 47.9221, -97.0887),
    ("570", 43.5397, -96.7321),
    ("571", 43.5397, -96.7321),
    ("572", 44.9094, -97.1532),
    ("573", 43.7296, -98.0337),
    ("574", 45.4646, -98.4680),
    ("575", 44.3748, -100.3205),
    ("576", 45.5411, -100.4349),
    ("577", 44.0716, -103.2205),
    ("580", 46.8653, -96.8292),
    ("581", 46.8653, -96.8292),
    ("582", 47.9221, -97.0887),
    ("583", 48.1131, -98.8753),
    ("584", 46.9063, -98.6937),
    ("585", 46.8140, -100.7695),
    ("586", 46.8140, -100.7695),
    ("587", 48.2374, -101.2780),
    ("588", 48.1814, -103.6364),
    ("590", 45.7889, -108.5509),
    ("591", 45.7889, -108.5509),
    ("592", 48.0933, -105.6413),
    ("593", 46.4059, -105.8385),
    ("594", 47.5022, -111.2995),
    ("595", 48.5427, -109.6804),
    ("596", 46.5965, -112.0199),
    ("597", 45.9020, -112.6571),
    ("598", 46.8685, -114.0095),
    ("599", 48.2156, -114.3261),
    ("600", 42.1181, -88.0430),
    ("601", 41.9182, -88.1308),
    ("602", 42.0463, -87.6942),
    ("603", 41.8872, -87.7899),
    ("604", 41.8373, -87.6862),
    ("605", 41.8373, -87.6862),
    ("606", 41.8373, -87.6862),
    ("607", 41.8373, -87.6862),
    ("608", 41.8373, -87.6862),
    ("609", 41.1020, -87.8643),
    ("610", 42.2598, -89.0641),
    ("611", 42.2598, -89.0641),
    ("612", 41.4699, -90.5827),
    ("613", 41.3575, -89.0718),
    ("614", 40.9506, -90.3763),
    ("615", 40.7521, -89.6155),
    ("616", 40.7521, -89.6155),
    ("617", 40.4757, -88.9703),
    ("618", 40.1144, -88.2735),
    ("619", 40.1144, -88.2735),
    ("620", 38.6358, -90.2451),
    ("622", 38.6156, -90.1304),
    ("623", 39.9335, -91.3798),
    ("624", 39.1207, -88.5509),
    ("625", 39.7710, -89.6537),
    ("626", 39.7710, -89.6537),
    ("627", 39.7710, -89.6537),
    ("628", 38.5224, -89.1233),
    ("629", 37.7220, -89.2238),
    ("630", 38.6358, -90.2451),
    ("631", 38.6358, -90.2451),
    ("633", 38.7956, -90.5156),
    ("634", 39.9335, -91.3798),
    ("635", 39.9335, -91.3798),
    ("636", 37.3108, -89.5596),
    ("637", 37.3108, -89.5596),
    ("638", 37.3108, -89.5596),
    ("639", 37.3108, -89.5596),
    ("640", 39.1239, -94.5541),
    ("641", 39.1239, -94.5541),
    ("644", 39.7598, -94.8210),
    ("645", 39.7598, -94.8210),
    ("646", 39.7953, -93.5498),
    ("647", 38.6530, -94.3467),
    ("648", 37.1943, -93.2915),
    ("649", 39.1239, -94.5541),
    ("650", 38.5676, -92.1759),
    ("651", 38.5676, -92.1759),
    ("652", 38.9477, -92.3255),
    ("653", 38.7042, -93.2351),
    ("654", 37.1943, -93.2915),
    ("655", 37.1943, -93.2915),
    ("656", 37.1943, -93.2915),
    ("657", 37.1943, -93.2915),
    ("658", 37.1943, -93.2915),
    ("660", 39.1234, -94.7443),
    ("661", 39.1234, -94.7443),
    ("662", 39.1234, -94.7443),
    ("664", 39.0346, -95.6955),
    ("665", 39.0346, -95.6955),
    ("666", 39.0346, -95.6955),
    ("667", 37.8283, -94.7038),
    ("668", 39.0346, -95.6955),
    ("669", 38.8137, -97.6143),
    ("670", 37.6897, -97.3441),
    ("671", 37.6897, -97.3441),
    ("672", 37.6897, -97.3441),
    ("673", 37.2118, -95.7328),
    ("674", 38.8137, -97.6143),
    ("675", 38.0671, -97.9081),
    ("676", 38.8816, -99.3219),
    ("677", 39.3843, -101.0459),
    ("678", 37.7610, -100.0182),
    ("679", 37.0466, -100.9295),
    ("680", 41.2628, -96.0498),
    ("681", 41.2628, -96.0498),
    ("683", 40.8088, -96.6796),
    ("684", 40.8088, -96.6796),
    ("685", 40.8088, -96.6796),
    ("686", 42.0328, -97.4209),
    ("687", 42.0328, -97.4209),
    ("688", 40.9214, -98.3584),
    ("689", 40.9214, -98.3584),
    ("690", 40.2046, -100.6213),
    ("691", 41.1266, -100.7640),
    ("692", 42.8739, -100.5498),
    ("693", 42.1025, -102.8766),
    ("700", 30.0687, -89.9288),
    ("701", 30.0687, -89.9288),
    ("703", 29.5799, -90.7058),
    ("704", 30.3750, -90.0906),
    ("705", 30.2084, -92.0323),
    ("706", 30.2022, -93.2141),
    ("707", 30.4419, -91.1310),
    ("708", 30.4419, -91.1310),
    ("710", 32.4659, -93.7959),
    ("711", 32.4659, -93.7959),
    ("712", 32.5183, -92.0775),
    ("713", 31.2923, -92.4702),
    ("714", 31.2923, -92.4702),
    ("716", 34.2116, -92.0178),
    ("717", 33.5672, -92.8467),
    ("718", 33.4361, -93.9960),
    ("719", 34.4902, -93.0498),
    ("720", 34.7255, -92.3580),
    ("721", 34.7255, -92.3580),
    ("722", 34.7255, -92.3580),
    ("723", 35.1046, -89.9773),
    ("724", 35.8211, -90.6793),
    ("725", 35.7687, -91.6226),
    ("726", 36.2438, -93.1198),
    ("727", 36.0713, -94.1660),
    ("728", 35.2763, -93.1383),
    ("729", 35.3493, -94.3695),
    ("730", 35.4676, -97.5137),
    ("731", 35.4676, -97.5137),
    ("733", 30.3006, -97.7517),
    ("734", 34.1943, -97.1253),
    ("735", 34.6176, -98.4203),
    ("736", 35.5058, -98.9724),
    ("737", 36.4061, -97.8701),
    ("738", 36.4246, -99.4057),
    ("739", 37.0466, -100.9295),
    ("740", 36.1284, -95.9043),
    ("741", 36.1284, -95.9043),
    ("743", 36.1284, -95.9043),
    ("744", 35.7430, -95.3566),
    ("745", 34.9262, -95.7698),
    ("746", 36.7235, -97.0679),
    ("747", 33.9957, -96.3938),
    ("748", 35.3525, -96.9647),
    ("749", 35.0430, -94.6357),
    ("750", 32.7936, -96.7662),
    ("751", 32.7936, -96.7662),
    ("752", 32.7936, -96.7662),
    ("753", 32.7936, -96.7662),
    ("754", 33.1116, -96.1099),
    ("755", 33.4487, -94.0815),
    ("756", 32.5192, -94.7622),
    ("757", 32.3184, -95.3065),
    ("758", 31.7544, -95.6471),
    ("759", 31.3217, -94.7277),
    ("760", 32.7812, -97.3472),
    ("761", 32.7812, -97.3472),
    ("762", 33.2176, -97.1419),
    ("763", 33.9072, -98.5290),
    ("764", 32.2148, -98.2205),
    ("765", 31.5597, -97.1882),
    ("766", 31.5597, -97.1882),
    ("767", 31.5597, -97.1882),
    ("768", 32.4543, -99.7384),
    ("769", 32.0249, -102.1137),
    ("770", 29.7869, -95.3905),
    ("771", 29.7869, -95.3905),
    ("772", 29.7869, -95.3905),
    ("773", 30.3224, -95.4820),
    ("774", 29.5824, -95.7602),
    ("775", 29.6584, -95.1499),
    ("776", 30.0850, -94.1451),
    ("777", 30.0850, -94.1451),
    ("778", 30.6657, -96.3668),
    ("779", 28.8285, -96.9850),
    ("780", 29.4658, -98.5254),
    ("781", 29.4658, -98.5254),
    ("782", 29.4658, -98.5254),
    ("783", 27.7261, -97.3755),
    ("784", 27.7261, -97.3755),
    ("785", 26.2273, -98.2471),
    ("786", 30.3006, -97.7517),
    ("787", 30.3006, -97.7517),
    ("788", 29.4658, -98.5254),
    ("789", 30.3006, -97.7517),
    ("790", 35.1989, -101.8310),
    ("791", 35.1989, -101.8310),
    ("792", 34.4293, -100.2516),
    ("793", 33.5642, -101.8871),
    ("794", 33.5642, -101.8871),
    ("795", 32.4543, -99.7384),
    ("796", 32.4543, -99.7384),
    ("797", 32.0249, -102.1137),
    ("798", 31.8479, -106.4309),
    ("799", 31.8479, -106.4309),
    ("800", 39.7621, -104.8759),
    ("801", 39.7621, -104.8759),
    ("802", 39.7621, -104.8759),
    ("803", 40.0249, -105.2523),
    ("804", 39.7621, -104.8759),
    ("805", 40.1690, -105.0996),
    ("806", 39.7621, -104.8759),
    ("807", 39.7621, -104.8759),
    ("808", 38.8674, -104.7606),
    ("809", 38.8674, -104.7606),
    ("810", 38.2713, -104.6105),
    ("811", 37.4755, -105.8770),
    ("812", 38.5300, -105.9984),
    ("813", 37.2744, -107.8703),
    ("814", 39.0877, -108.5673),
    ("815", 39.0877, -108.5673),
    ("816", 39.5455, -107.3347),
    ("820", 41.1405, -104.7927),
    ("821", 44.4280, -110.5885),
    ("822", 42.0516, -104.9595),
    ("823", 41.7849, -107.2265),
    ("824", 44.0026, -107.9543),
    ("825", 43.0425, -108.4142),
    ("826", 42.8420, -106.3207),
    ("827", 44.2752, -105.4984),
    ("828", 44.7962, -106.9643),
    ("829", 41.5951, -109.2237),
    ("830", 41.5951, -109.2237),
    ("831", 41.5951, -109.2237),
    ("832", 42.8716, -112.4652),
    ("833", 42.5648, -114.4617),
    ("834", 42.8716, -112.4652),
    ("835", 46.3934, -116.9934),
    ("836", 43.6007, -116.2312),
    ("837", 43.6007, -116.2312),
    ("838", 47.6671, -117.4330),
    ("840", 40.7774, -111.9300),
    ("841", 40.7774, -111.9300),
    ("842", 41.2280, -111.9677),
    ("843", 41.2280, -111.9677),
    ("844", 41.2280, -111.9677),
    ("845", 40.2457, -111.6457),
    ("846", 40.2457, -111.6457),
    ("847", 40.2457, -111.6457),
    ("850", 33.5722, -112.0891),
    ("852", 33.5722, -112.0891),
    ("853", 33.5722, -112.0891),
    ("855", 33.3869, -110.7514),
    ("856", 32.1545, -110.8782),
    ("857", 32.1545, -110.8782),
    ("859", 34.2671, -110.0384),
    ("860", 35.1872, -111.6195),
    ("863", 34.5850, -112.4475),
    ("864", 35.2170, -114.0105),
    ("865", 35.5183, -108.7423),
    ("870", 35.1053, -106.6464),
    ("871", 35.1053, -106.6464),
    ("872", 35.1053, -106.6464),
    ("873", 35.5183, -108.7423),
    ("874", 36.7555, -108.1823),
    ("875", 35.1053, -106.6464),
    ("877", 35.6011, -105.2206),
    ("878", 34.0543, -106.9066),
    ("879", 33.1864, -107.2589),
    ("880", 32.3265, -106.7893),
    ("881", 34.4376, -103.1923),
    ("882", 33.3730, -104.5294),
    ("883", 32.8837, -105.9624),
    ("884", 35.1701, -103.7042),
    ("885", 31.8479, -106.4309),
    ("889", 36.2333, -115.2654),
    ("890", 36.2333, -115.2654),
    ("891", 36.2333, -115.2654),
    ("893", 39.2649, -114.8709),
    ("894", 39.5497, -119.8483),
    ("895", 39.5497, -119.8483),
    ("897", 39.1511, -119.7474),
    ("898", 40.8387, -115.7674),
    ("900", 34.1139, -118.4068),
    ("901", 34.1139, -118.4068),
    ("902", 33.9566, -118.3444),
    ("903", 33.9566, -118.3444),
    ("904", 34.0232, -118.4813),
    ("905", 33.8346, -118.3417),
    ("906", 33.7980, -118.1675),
    ("907", 33.7980, -118.1675),
    ("908", 33.7980, -118.1675),
    ("910", 34.1597, -118.1390),
    ("911", 34.1597, -118.1390),
    ("912", 34.1818, -118.2468),
    ("913", 34.1914, -118.8755),
    ("914", 34.1899, -118.4514),
    ("915", 34.1879, -118.3235),
    ("916", 34.1870, -118.3813),
    ("917", 34.0175, -117.9268),
    ("918", 34.0175, -117.9268),
    ("919", 32.8312, -117.1225),
    ("920", 32.8312, -117.1225),
    ("921", 32.8312, -117.1225),
    ("922", 33.7346, -116.2346),
    ("923", 34.1417, -117.2945),
    ("924", 34.1417, -117.2945),
    ("925", 33.9381, -117.3948),
    ("926", 33.7366, -117.8819),
    ("927", 33.7366, -117.8819),
    ("928", 33.8390, -117.8573),
    ("930", 34.1962, -119.1819),
    ("931", 34.4285, -119.7202),
    ("932", 35.3530, -119.0359),
    ("933", 35.3530, -119.0359),
    ("934", 34.4285, -119.7202),
    ("935", 35.0139, -118.1895),
    ("936", 36.7831, -119.7941),
    ("937", 36.7831, -119.7941),
    ("938", 36.7831, -119.7941),
    ("939", 36.6884, -121.6317),
    ("940", 37.7562, -122.4430),
    ("941", 37.7562, -122.4430),
    ("942", 38.5667, -121.4683),
    ("943", 37.3913, -122.1467),
    ("944", 37.5522, -122.3122),
    ("945", 37.7903, -122.2165),
    ("946", 37.7903, -122.2165),
    ("947", 37.8723, -122.2760),
    ("948", 37.9477, -122.3390),
    ("949", 37.9904, -122.5222),
    ("950", 37.3021, -121.8489),
    ("951", 37.3021, -121.8489),
    ("952", 37.9766, -121.3111),
    ("953", 37.9766, -121.3111),
    ("954", 38.4458, -122.7067),
    ("955", 40.7941, -124.1568),
    ("956", 38.5667, -121.4683),
    ("957", 38.5667, -121.4683),
    ("958", 38.5667, -121.4683),
    ("959", 39.1518, -121.5836),
    ("960", 40.5698, -122.3650),
    ("961", 39.5497, -119.8483),
    ("967", 21.3294, -157.8460),
    ("968", 21.3294, -157.8460),
    ("969", 13.4708, -144.8181),
    ("970", 45.5371, -122.6500),
    ("971", 45.5371, -122.6500),
    ("972", 45.5371, -122.6500),
    ("973", 44.9232, -123.0245),
    ("974", 44.0563, -123.1173),
    ("975", 42.3372, -122.8537),
    ("976", 42.2191, -121.7754),
    ("977", 44.0562, -121.3087),
    ("978", 45.6755, -118.8209),
    ("979", 43.6007, -116.2312),
    ("980", 47.6211, -122.3244),
    ("981", 47.6211, -122.3244),
    ("982", 47.9524, -122.1670),
    ("983", 47.2431, -122.4531),
    ("984", 47.2431, -122.4531),
    ("985", 47.0417, -122.8959),
    ("986", 45.5371, -122.6500),
    ("988", 47.4338, -120.3286),
    ("989", 46.5923, -120.5496),
    ("990", 47.6671, -117.4330),
    ("991", 47.6671, -117.4330),
    ("992", 47.6671, -117.4330),
    ("993", 46.2506, -119.1303),
    ("994", 46.3934, -116.9934),
    ("995", 61.1508, -149.1091),
    ("996", 61.1508, -149.1091),
    ("997", 64.8353, -147.6534),
    ("998", 58.4546, -134.1739),
    ("999", 55.3556, -131.6698),
];
